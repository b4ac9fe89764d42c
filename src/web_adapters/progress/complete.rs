use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use chrono::Utc;
use db_adapters::{
    activity_streak_adapter::ActivityStreakAdapter, progress_adapter::ProgressAdapter,
};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    progress::{complete::complete_content, types::ProgressCompleteRequest},
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_500};

#[tracing::instrument(name = "Recording completed content", skip(db, user))]
#[post("/complete")]
pub async fn complete(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<ProgressCompleteRequest>,
) -> HttpResponse {
    match user {
        Some(user) => {
            let user = user.into_inner();
            match complete_content(
                &user,
                req.into_inner(),
                ProgressAdapter::init(&db),
                ActivityStreakAdapter::init(&db),
                Utc::now().date_naive(),
            )
            .await
            {
                Ok(_) => HttpResponse::Ok().finish(),
                Err(UseCaseError::BadRequest(message)) => response_400(&message),
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
