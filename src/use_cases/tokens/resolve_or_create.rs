use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, FixedOffset};
use db_adapters::action_token_adapter::ActionTokenAdapter;
use entities::{action_token, sea_orm_active_enums::TokenKind, user};
use once_cell::sync::Lazy;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    tokens::{find_active::find_active_token, issue::issue_token},
    UseCaseError,
};

const REUSE_WINDOW_SECONDS: i64 = 60;

/// Per-(user, kind) locks serializing the check-then-issue sequence, so two
/// concurrent requests cannot both mint a token inside the reuse window.
/// Entries are removed again once the last holder releases them, so the
/// registry stays empty between requests.
static ISSUANCE_LOCKS: Lazy<Mutex<HashMap<(Uuid, TokenKind), Arc<Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

async fn issuance_lock(user_id: Uuid, kind: TokenKind) -> Arc<Mutex<()>> {
    let mut locks = ISSUANCE_LOCKS.lock().await;
    locks.entry((user_id, kind)).or_default().clone()
}

/// Cloning out of the registry happens under the registry mutex, so once our
/// clone is dropped a strong count of 1 means the registry holds the only
/// reference and the entry can go.
async fn _release_issuance_lock(user_id: Uuid, kind: TokenKind, lock: Arc<Mutex<()>>) {
    let mut locks = ISSUANCE_LOCKS.lock().await;
    drop(lock);
    let no_other_holders = locks
        .get(&(user_id, kind))
        .is_some_and(|entry| Arc::strong_count(entry) == 1);
    if no_other_holders {
        locks.remove(&(user_id, kind));
    }
}

/// Reuses an active token created less than 60 seconds ago, otherwise mints
/// a new one. Rapid repeated requests (double-clicked "resend" buttons) get
/// the same token back instead of flooding the table.
pub async fn resolve_or_create_token<'a>(
    user: &user::Model,
    kind: TokenKind,
    token_adapter: ActionTokenAdapter<'a>,
    now: DateTime<FixedOffset>,
) -> Result<action_token::Model, UseCaseError> {
    let lock = issuance_lock(user.id, kind).await;
    let result = {
        let _guard = lock.lock().await;
        _resolve_or_create(user, kind, token_adapter, now).await
    };
    _release_issuance_lock(user.id, kind, lock).await;
    result
}

async fn _resolve_or_create(
    user: &user::Model,
    kind: TokenKind,
    token_adapter: ActionTokenAdapter<'_>,
    now: DateTime<FixedOffset>,
) -> Result<action_token::Model, UseCaseError> {
    let reusable = find_active_token(user, kind, token_adapter.clone(), now)
        .await?
        .filter(|token| now - token.created_at < Duration::seconds(REUSE_WINDOW_SECONDS));
    match reusable {
        Some(token) => Ok(token),
        None => issue_token(user, kind, token_adapter, now).await,
    }
}
