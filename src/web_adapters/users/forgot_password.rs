use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use chrono::Utc;
use common::settings::types::Settings;
use db_adapters::{
    action_token_adapter::ActionTokenAdapter,
    user_adapter::{UserAdapter, UserFilter, UserQuery},
};
use entities::sea_orm_active_enums::TokenKind;
use sea_orm::DbConn;
use use_cases::tokens::resolve_or_create::resolve_or_create_token;

use crate::utils::emails::send_password_reset_email;

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct UserEmail {
    email: String,
}

/// Responds identically whether or not the email belongs to an account, so
/// the endpoint cannot be used to enumerate registered addresses.
#[tracing::instrument(name = "Requesting a password reset", skip(db, req, settings))]
#[post("/forgot-password")]
pub async fn forgot_password(
    db: Data<DbConn>,
    req: Json<UserEmail>,
    settings: Data<Settings>,
) -> HttpResponse {
    match UserAdapter::init(&db)
        .filter_eq_email_verified(true)
        .get_by_email(req.email.clone())
        .await
    {
        Ok(Some(user)) => {
            match resolve_or_create_token(
                &user,
                TokenKind::PasswordReset,
                ActionTokenAdapter::init(&db),
                Utc::now().into(),
            )
            .await
            {
                Ok(token) => send_password_reset_email(&user, &token.secret, &settings),
                Err(e) => {
                    tracing::event!(target: "backend", tracing::Level::ERROR, "Could not issue a password reset token: {:?}", e)
                }
            }
        }
        Ok(None) => (),
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::WARN, "User lookup failed on forgot-password: {:?}", e)
        }
    }
    HttpResponse::Ok()
        .json("If an account with this email exists, password reset instructions have been sent to it.")
}
