use chrono::Utc;
use entities::{progress, sea_orm_active_enums::ContentKind};
use sea_orm::Set;
use uuid::Uuid;

pub fn progress(user_id: Uuid) -> progress::ActiveModel {
    progress::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        content_kind: Set(ContentKind::Reading),
        completed_count: Set(0),
        updated_at: Set(Utc::now().into()),
    }
}

pub trait ProgressFactory {
    fn content_kind(self, content_kind: ContentKind) -> progress::ActiveModel;
    fn completed_count(self, completed_count: i32) -> progress::ActiveModel;
}

impl ProgressFactory for progress::ActiveModel {
    fn content_kind(mut self, content_kind: ContentKind) -> progress::ActiveModel {
        self.content_kind = Set(content_kind);
        self
    }

    fn completed_count(mut self, completed_count: i32) -> progress::ActiveModel {
        self.completed_count = Set(completed_count);
        self
    }
}
