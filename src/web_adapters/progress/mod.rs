use actix_web::web::{scope, ServiceConfig};

mod complete;
mod dashboard_stats;
mod summary;

pub fn progress_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/progress")
            .service(complete::complete)
            .service(summary::summary)
            .service(dashboard_stats::dashboard_stats),
    );
}
