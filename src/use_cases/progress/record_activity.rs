use chrono::{Duration, NaiveDate};
use db_adapters::activity_streak_adapter::{
    ActivityStreakAdapter, ActivityStreakMutation, ActivityStreakQuery,
};
use entities::user;
use sea_orm::DbErr;

/// Applies the daily-streak transition for an activity on `today`. Streak
/// bookkeeping must never fail the triggering request, so storage errors are
/// logged and swallowed here.
pub async fn record_activity<'a>(
    user: &user::Model,
    today: NaiveDate,
    streak_adapter: ActivityStreakAdapter<'a>,
) {
    if let Err(e) = _record(user, today, streak_adapter).await {
        tracing::warn!(
            "Failed to update activity streak for user {}: {:?}",
            user.id,
            e
        );
    }
}

async fn _record(
    user: &user::Model,
    today: NaiveDate,
    streak_adapter: ActivityStreakAdapter<'_>,
) -> Result<(), DbErr> {
    match streak_adapter.clone().get_by_user(user.id).await? {
        Some(record) => {
            if let Some(streak) = next_streak(record.streak, record.last_activity_date, today) {
                streak_adapter.update(record, streak, today).await?;
            }
        }
        None => {
            streak_adapter.create(user.id, 1, today).await?;
        }
    }
    Ok(())
}

/// `None` means no mutation: at most one streak update per calendar day.
fn next_streak(streak: i32, last_activity_date: Option<NaiveDate>, today: NaiveDate) -> Option<i32> {
    match last_activity_date {
        Some(last) if last == today => None,
        Some(last) if last + Duration::days(1) == today => Some(streak + 1),
        _ => Some(1),
    }
}
