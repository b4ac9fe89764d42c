use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCompleteRequest {
    pub content_type: String,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub exercises_completed: i32,
    pub hours_practiced: f64,
    pub vocabulary_words: i32,
    pub day_streak: i32,
}
