use chrono::{DateTime, FixedOffset};
use db_adapters::action_token_adapter::{
    ActionTokenAdapter, ActionTokenFilter, ActionTokenQuery,
};
use entities::{action_token, sea_orm_active_enums::TokenKind, user};

use crate::{error_500, UseCaseError};

/// Most recently created token of this kind that is still redeemable at
/// `now`: unused and not yet expired.
pub async fn find_active_token<'a>(
    user: &user::Model,
    kind: TokenKind,
    token_adapter: ActionTokenAdapter<'a>,
    now: DateTime<FixedOffset>,
) -> Result<Option<action_token::Model>, UseCaseError> {
    token_adapter
        .filter_eq_user(user)
        .filter_eq_kind(kind)
        .filter_eq_used(false)
        .filter_expires_after(now)
        .get_latest()
        .await
        .map_err(error_500)
}
