use actix_web::{
    get,
    web::{Data, ReqData},
    HttpResponse,
};
use db_adapters::{
    activity_streak_adapter::ActivityStreakAdapter, progress_adapter::ProgressAdapter,
};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::progress::dashboard::get_dashboard_stats;

use crate::utils::{response_401, response_500};

#[tracing::instrument(name = "Building dashboard stats", skip(db, user))]
#[get("/dashboard-stats")]
pub async fn dashboard_stats(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match get_dashboard_stats(
                &user,
                ProgressAdapter::init(&db),
                ActivityStreakAdapter::init(&db),
            )
            .await
            {
                Ok(stats) => HttpResponse::Ok().json(stats),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
