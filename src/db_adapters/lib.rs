pub mod action_token_adapter;
pub mod activity_streak_adapter;
pub mod progress_adapter;
pub mod user_adapter;

pub use sea_orm::Order;
