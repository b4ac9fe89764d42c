use std::future::Future;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    Select, Set,
};
use uuid::Uuid;

use entities::user_activity_streak::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct ActivityStreakAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> ActivityStreakAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait ActivityStreakQuery {
    fn get_by_user(self, user_id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl ActivityStreakQuery for ActivityStreakAdapter<'_> {
    async fn get_by_user(self, user_id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}

pub trait ActivityStreakMutation {
    fn create(
        self,
        user_id: Uuid,
        streak: i32,
        last_activity_date: NaiveDate,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn update(
        self,
        streak_record: Model,
        streak: i32,
        last_activity_date: NaiveDate,
    ) -> impl Future<Output = Result<Model, DbErr>>;
}

impl ActivityStreakMutation for ActivityStreakAdapter<'_> {
    async fn create(
        self,
        user_id: Uuid,
        streak: i32,
        last_activity_date: NaiveDate,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            user_id: Set(user_id),
            streak: Set(streak),
            last_activity_date: Set(Some(last_activity_date)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(self.db)
        .await
    }

    async fn update(
        self,
        streak_record: Model,
        streak: i32,
        last_activity_date: NaiveDate,
    ) -> Result<Model, DbErr> {
        let mut streak_record = streak_record.into_active_model();
        streak_record.streak = Set(streak);
        streak_record.last_activity_date = Set(Some(last_activity_date));
        streak_record.updated_at = Set(Utc::now().into());
        streak_record.update(self.db).await
    }
}
