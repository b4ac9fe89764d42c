mod action_token;
mod progress;
mod user;
mod user_activity_streak;

pub use action_token::{action_token, ActionTokenFactory};
pub use progress::{progress, ProgressFactory};
pub use user::{user, UserFactory};
pub use user_activity_streak::{user_activity_streak, UserActivityStreakFactory};
