pub mod complete;
pub mod dashboard;
pub mod record_activity;
pub mod summary;
pub mod types;
