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
use use_cases::progress::summary::get_progress_summary;

use crate::utils::{response_401, response_500};

#[tracing::instrument(name = "Listing completion counts", skip(db, user))]
#[get("/summary")]
pub async fn summary(db: Data<DbConn>, user: Option<ReqData<user_entity::Model>>) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match get_progress_summary(
                &user,
                ProgressAdapter::init(&db),
                ActivityStreakAdapter::init(&db),
            )
            .await
            {
                Ok(summary) => HttpResponse::Ok().json(summary),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
