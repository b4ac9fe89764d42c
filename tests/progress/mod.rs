mod complete;
mod dashboard_stats;
mod summary;
