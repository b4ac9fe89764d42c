use chrono::{NaiveDate, Utc};
use entities::user_activity_streak;
use sea_orm::Set;
use uuid::Uuid;

pub fn user_activity_streak(user_id: Uuid) -> user_activity_streak::ActiveModel {
    let now = Utc::now();
    user_activity_streak::ActiveModel {
        user_id: Set(user_id),
        streak: Set(0),
        last_activity_date: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserActivityStreakFactory {
    fn streak(self, streak: i32) -> user_activity_streak::ActiveModel;
    fn last_activity_date(self, date: Option<NaiveDate>) -> user_activity_streak::ActiveModel;
}

impl UserActivityStreakFactory for user_activity_streak::ActiveModel {
    fn streak(mut self, streak: i32) -> user_activity_streak::ActiveModel {
        self.streak = Set(streak);
        self
    }

    fn last_activity_date(mut self, date: Option<NaiveDate>) -> user_activity_streak::ActiveModel {
        self.last_activity_date = Set(date);
        self
    }
}
