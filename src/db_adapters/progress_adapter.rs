use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    Select, Set,
};
use uuid::Uuid;

use entities::{
    progress::{ActiveModel, Column, Entity, Model},
    sea_orm_active_enums::ContentKind,
    user,
};

#[derive(Clone)]
pub struct ProgressAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> ProgressAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait ProgressFilter {
    fn filter_eq_user(self, user: &user::Model) -> Self;
    fn filter_eq_content_kind(self, content_kind: ContentKind) -> Self;
}

impl ProgressFilter for ProgressAdapter<'_> {
    fn filter_eq_user(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user.id));
        self
    }

    fn filter_eq_content_kind(mut self, content_kind: ContentKind) -> Self {
        self.query = self.query.filter(Column::ContentKind.eq(content_kind));
        self
    }
}

pub trait ProgressQuery {
    fn get_one(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl ProgressQuery for ProgressAdapter<'_> {
    async fn get_one(self) -> Result<Option<Model>, DbErr> {
        self.query.one(self.db).await
    }

    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }
}

pub trait ProgressMutation {
    fn create(
        self,
        user_id: Uuid,
        content_kind: ContentKind,
        completed_count: i32,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_completed_count(
        self,
        progress: Model,
        completed_count: i32,
    ) -> impl Future<Output = Result<Model, DbErr>>;
}

impl ProgressMutation for ProgressAdapter<'_> {
    async fn create(
        self,
        user_id: Uuid,
        content_kind: ContentKind,
        completed_count: i32,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            content_kind: Set(content_kind),
            completed_count: Set(completed_count),
            updated_at: Set(Utc::now().into()),
        }
        .insert(self.db)
        .await
    }

    async fn update_completed_count(
        self,
        progress: Model,
        completed_count: i32,
    ) -> Result<Model, DbErr> {
        let mut progress = progress.into_active_model();
        progress.completed_count = Set(completed_count);
        progress.updated_at = Set(Utc::now().into());
        progress.update(self.db).await
    }
}
