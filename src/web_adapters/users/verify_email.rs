use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use chrono::Utc;
use db_adapters::{
    action_token_adapter::ActionTokenAdapter,
    user_adapter::{UserAdapter, UserMutation},
};
use entities::sea_orm_active_enums::TokenKind;
use sea_orm::DbConn;
use use_cases::{tokens::redeem::redeem_token, UseCaseError};

use crate::utils::{response_400, response_500};

#[derive(serde::Deserialize)]
pub struct Parameters {
    token: String,
}

#[tracing::instrument(name = "Verifying a user's email address", skip(db, parameters))]
#[get("/verify-email")]
pub async fn verify_email(parameters: Query<Parameters>, db: Data<DbConn>) -> HttpResponse {
    match redeem_token(
        parameters.token.clone(),
        TokenKind::EmailVerification,
        ActionTokenAdapter::init(&db),
        UserAdapter::init(&db),
        Utc::now().into(),
    )
    .await
    {
        Ok(user) => match UserAdapter::init(&db).mark_email_verified(user).await {
            Ok(_) => {
                tracing::event!(target: "backend", tracing::Level::INFO, "User's email was verified successfully.");
                HttpResponse::Ok()
                    .json("Your email has been verified successfully! You can now log in.")
            }
            Err(e) => response_500(e),
        },
        Err(UseCaseError::InvalidToken) => response_400(
            "This verification link is invalid, expired or already used. Please request a new one.",
        ),
        Err(e) => response_500(e),
    }
}
