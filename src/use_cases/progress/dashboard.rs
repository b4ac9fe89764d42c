use db_adapters::{
    activity_streak_adapter::{ActivityStreakAdapter, ActivityStreakQuery},
    progress_adapter::{ProgressAdapter, ProgressFilter, ProgressQuery},
};
use entities::user;

use crate::{error_500, progress::types::DashboardStats, UseCaseError};

const HOURS_PER_EXERCISE: f64 = 0.5;
const WORDS_PER_EXERCISE: i32 = 8;

/// Headline numbers for the dashboard. Hours and vocabulary are estimates
/// derived from the completion total; the streak degrades to zero on lookup
/// failure rather than failing the page.
pub async fn get_dashboard_stats<'a>(
    user: &user::Model,
    progress_adapter: ProgressAdapter<'a>,
    streak_adapter: ActivityStreakAdapter<'a>,
) -> Result<DashboardStats, UseCaseError> {
    let records = progress_adapter
        .filter_eq_user(user)
        .get_all()
        .await
        .map_err(error_500)?;
    let exercises_completed: i32 = records.iter().map(|p| p.completed_count).sum();

    let day_streak = match streak_adapter.get_by_user(user.id).await {
        Ok(Some(record)) => record.streak,
        Ok(None) => 0,
        Err(e) => {
            tracing::warn!("Failed to read streak for user {}: {:?}", user.id, e);
            0
        }
    };

    Ok(DashboardStats {
        exercises_completed,
        hours_practiced: (exercises_completed as f64 * HOURS_PER_EXERCISE * 10.0).round() / 10.0,
        vocabulary_words: exercises_completed * WORDS_PER_EXERCISE,
        day_streak,
    })
}
