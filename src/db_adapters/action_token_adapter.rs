use std::future::Future;

use chrono::{DateTime, FixedOffset};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, Order, QueryFilter,
    QueryOrder, Select, Set,
};
use uuid::Uuid;

use entities::{
    action_token::{ActiveModel, Column, Entity, Model},
    sea_orm_active_enums::TokenKind,
    user,
};

#[derive(Clone)]
pub struct ActionTokenAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> ActionTokenAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait ActionTokenFilter {
    fn filter_eq_user(self, user: &user::Model) -> Self;
    fn filter_eq_kind(self, kind: TokenKind) -> Self;
    fn filter_eq_used(self, used: bool) -> Self;
    fn filter_expires_after(self, datetime: DateTime<FixedOffset>) -> Self;
}

impl ActionTokenFilter for ActionTokenAdapter<'_> {
    fn filter_eq_user(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user.id));
        self
    }

    fn filter_eq_kind(mut self, kind: TokenKind) -> Self {
        self.query = self.query.filter(Column::Kind.eq(kind));
        self
    }

    fn filter_eq_used(mut self, used: bool) -> Self {
        self.query = self.query.filter(Column::Used.eq(used));
        self
    }

    fn filter_expires_after(mut self, datetime: DateTime<FixedOffset>) -> Self {
        self.query = self.query.filter(Column::ExpiresAt.gt(datetime));
        self
    }
}

pub trait ActionTokenQuery {
    fn get_by_secret(self, secret: String)
        -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_latest(self) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl ActionTokenQuery for ActionTokenAdapter<'_> {
    async fn get_by_secret(self, secret: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Secret.eq(secret))
            .one(self.db)
            .await
    }

    async fn get_latest(self) -> Result<Option<Model>, DbErr> {
        self.query
            .order_by(Column::CreatedAt, Order::Desc)
            .one(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateActionTokenParams {
    pub secret: String,
    pub user_id: Uuid,
    pub kind: TokenKind,
    pub expires_at: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
}

pub trait ActionTokenMutation {
    fn create(self, params: CreateActionTokenParams)
        -> impl Future<Output = Result<Model, DbErr>>;
    fn mark_used(self, token: Model) -> impl Future<Output = Result<Model, DbErr>>;
}

impl ActionTokenMutation for ActionTokenAdapter<'_> {
    async fn create(self, params: CreateActionTokenParams) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            secret: Set(params.secret),
            user_id: Set(params.user_id),
            kind: Set(params.kind),
            code: Set(None),
            expires_at: Set(params.expires_at),
            used: Set(false),
            created_at: Set(params.created_at),
        }
        .insert(self.db)
        .await
    }

    async fn mark_used(self, token: Model) -> Result<Model, DbErr> {
        let mut token = token.into_active_model();
        token.used = Set(true);
        token.update(self.db).await
    }
}
