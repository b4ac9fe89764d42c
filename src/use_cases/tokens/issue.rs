use chrono::{DateTime, FixedOffset};
use db_adapters::action_token_adapter::{
    ActionTokenAdapter, ActionTokenMutation, CreateActionTokenParams,
};
use entities::{
    action_token, custom_methods::action_token::TokenKindTrait, sea_orm_active_enums::TokenKind,
    user,
};

use crate::{error_500, tokens::secret::generate_secret, UseCaseError};

/// Mints a fresh single-use token. `expires_at` is fixed at creation and
/// never refreshed afterwards.
pub async fn issue_token<'a>(
    user: &user::Model,
    kind: TokenKind,
    token_adapter: ActionTokenAdapter<'a>,
    now: DateTime<FixedOffset>,
) -> Result<action_token::Model, UseCaseError> {
    token_adapter
        .create(CreateActionTokenParams {
            secret: generate_secret(),
            user_id: user.id,
            kind,
            expires_at: now + kind.time_to_live(),
            created_at: now,
        })
        .await
        .map_err(error_500)
}
