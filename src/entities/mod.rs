pub mod action_token;
pub mod custom_methods;
pub mod progress;
pub mod sea_orm_active_enums;
pub mod user;
pub mod user_activity_streak;
