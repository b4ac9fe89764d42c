use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct AssistantChatRequest {
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct AssistantChatResponse {
    pub reply: String,
}

#[derive(Serialize, Debug)]
pub struct AssistantStatusResponse {
    pub configured: bool,
    pub message: String,
}
