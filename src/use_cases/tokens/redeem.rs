use chrono::{DateTime, FixedOffset};
use db_adapters::{
    action_token_adapter::{ActionTokenAdapter, ActionTokenMutation, ActionTokenQuery},
    user_adapter::{UserAdapter, UserQuery},
};
use entities::{sea_orm_active_enums::TokenKind, user};

use crate::{error_500, UseCaseError};

/// Validates and consumes a token, returning its owner. Every rejection is
/// the same `InvalidToken` so callers cannot distinguish unknown, wrong-kind,
/// used and expired secrets.
pub async fn redeem_token<'a>(
    secret: String,
    expected_kind: TokenKind,
    token_adapter: ActionTokenAdapter<'a>,
    user_adapter: UserAdapter<'a>,
    now: DateTime<FixedOffset>,
) -> Result<user::Model, UseCaseError> {
    let token = token_adapter
        .clone()
        .get_by_secret(secret)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::InvalidToken)?;

    if token.kind != expected_kind || token.used || token.expires_at <= now {
        return Err(UseCaseError::InvalidToken);
    }

    let user = user_adapter
        .get_by_id(token.user_id)
        .await
        .map_err(error_500)?
        .ok_or(UseCaseError::InvalidToken)?;

    token_adapter.mark_used(token).await.map_err(error_500)?;
    Ok(user)
}
