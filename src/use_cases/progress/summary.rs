use std::collections::HashMap;

use db_adapters::{
    activity_streak_adapter::{ActivityStreakAdapter, ActivityStreakQuery},
    progress_adapter::{ProgressAdapter, ProgressFilter, ProgressQuery},
};
use entities::{sea_orm_active_enums::ContentKind, user};
use sea_orm::{ActiveEnum, Iterable};

use crate::{error_500, UseCaseError};

pub const STREAK_KEY: &str = "STREAK";

/// Completion counts keyed by content kind name, every kind present even at
/// zero, plus a `STREAK` entry. Streak lookup failures degrade to zero.
pub async fn get_progress_summary<'a>(
    user: &user::Model,
    progress_adapter: ProgressAdapter<'a>,
    streak_adapter: ActivityStreakAdapter<'a>,
) -> Result<HashMap<String, i32>, UseCaseError> {
    let mut summary = ContentKind::iter()
        .map(|kind| (kind.to_value(), 0))
        .collect::<HashMap<_, _>>();
    for progress in progress_adapter
        .filter_eq_user(user)
        .get_all()
        .await
        .map_err(error_500)?
    {
        summary.insert(progress.content_kind.to_value(), progress.completed_count);
    }

    let streak = match streak_adapter.get_by_user(user.id).await {
        Ok(Some(record)) => record.streak,
        Ok(None) => 0,
        Err(e) => {
            tracing::warn!("Failed to read streak for user {}: {:?}", user.id, e);
            0
        }
    };
    summary.insert(STREAK_KEY.to_string(), streak);
    Ok(summary)
}
