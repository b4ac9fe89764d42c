use actix_web::{
    post,
    web::{Data, Json},
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

use crate::utils::{auth::password, response_400, response_500};

#[derive(serde::Deserialize)]
pub struct Parameters {
    token: String,
    password: String,
}

#[tracing::instrument(name = "Resetting a user's password", skip(db, req))]
#[post("/reset-password")]
pub async fn reset_password(db: Data<DbConn>, req: Json<Parameters>) -> HttpResponse {
    match redeem_token(
        req.token.clone(),
        TokenKind::PasswordReset,
        ActionTokenAdapter::init(&db),
        UserAdapter::init(&db),
        Utc::now().into(),
    )
    .await
    {
        Ok(user) => {
            let hashed_password = password::hash(req.password.as_bytes()).await;
            match UserAdapter::init(&db)
                .update_password(user, hashed_password)
                .await
            {
                Ok(_) => HttpResponse::Ok().json(
                    "Your password has been changed successfully. Kindly login with the new password.",
                ),
                Err(e) => response_500(e),
            }
        }
        Err(UseCaseError::InvalidToken) => response_400(
            "It appears that your password reset token has expired or was previously used.",
        ),
        Err(e) => response_500(e),
    }
}
