use chrono::{Duration, Utc};
use entities::{action_token, sea_orm_active_enums::TokenKind};
use sea_orm::Set;
use uuid::Uuid;

pub fn action_token(user_id: Uuid) -> action_token::ActiveModel {
    let now = Utc::now();
    action_token::ActiveModel {
        id: Set(Uuid::new_v4()),
        secret: Set(format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())),
        user_id: Set(user_id),
        kind: Set(TokenKind::EmailVerification),
        code: Set(None),
        expires_at: Set((now + Duration::hours(24)).into()),
        used: Set(false),
        created_at: Set(now.into()),
    }
}

pub trait ActionTokenFactory {
    fn kind(self, kind: TokenKind) -> action_token::ActiveModel;
    fn expires_at(self, expires_at: chrono::DateTime<chrono::FixedOffset>)
        -> action_token::ActiveModel;
    fn used(self, used: bool) -> action_token::ActiveModel;
    fn created_at(
        self,
        created_at: chrono::DateTime<chrono::FixedOffset>,
    ) -> action_token::ActiveModel;
}

impl ActionTokenFactory for action_token::ActiveModel {
    fn kind(mut self, kind: TokenKind) -> action_token::ActiveModel {
        self.kind = Set(kind);
        self
    }

    fn expires_at(
        mut self,
        expires_at: chrono::DateTime<chrono::FixedOffset>,
    ) -> action_token::ActiveModel {
        self.expires_at = Set(expires_at);
        self
    }

    fn used(mut self, used: bool) -> action_token::ActiveModel {
        self.used = Set(used);
        self
    }

    fn created_at(
        mut self,
        created_at: chrono::DateTime<chrono::FixedOffset>,
    ) -> action_token::ActiveModel {
        self.created_at = Set(created_at);
        self
    }
}
