use chrono::NaiveDate;
use db_adapters::{
    activity_streak_adapter::ActivityStreakAdapter,
    progress_adapter::{ProgressAdapter, ProgressFilter, ProgressMutation, ProgressQuery},
};
use entities::{sea_orm_active_enums::ContentKind, user};
use sea_orm::ActiveEnum;

use crate::{
    error_500,
    progress::{record_activity::record_activity, types::ProgressCompleteRequest},
    UseCaseError,
};

/// Bumps the per-kind completion counter, then records today's activity for
/// the streak. Streak failures never surface to the caller.
pub async fn complete_content<'a>(
    user: &user::Model,
    params: ProgressCompleteRequest,
    progress_adapter: ProgressAdapter<'a>,
    streak_adapter: ActivityStreakAdapter<'a>,
    today: NaiveDate,
) -> Result<(), UseCaseError> {
    let content_kind = _parse_content_kind(&params.content_type)?;

    let existing = progress_adapter
        .clone()
        .filter_eq_user(user)
        .filter_eq_content_kind(content_kind)
        .get_one()
        .await
        .map_err(error_500)?;
    match existing {
        Some(progress) => {
            let completed_count = progress.completed_count + 1;
            progress_adapter
                .update_completed_count(progress, completed_count)
                .await
                .map_err(error_500)?;
        }
        None => {
            progress_adapter
                .create(user.id, content_kind, 1)
                .await
                .map_err(error_500)?;
        }
    }

    record_activity(user, today, streak_adapter).await;
    Ok(())
}

fn _parse_content_kind(raw: &str) -> Result<ContentKind, UseCaseError> {
    ContentKind::try_from_value(&raw.to_uppercase())
        .map_err(|_| UseCaseError::BadRequest("Invalid contentType".to_string()))
}
