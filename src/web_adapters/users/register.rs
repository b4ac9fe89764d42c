use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use chrono::Utc;
use common::settings::types::Settings;
use db_adapters::{
    action_token_adapter::ActionTokenAdapter,
    user_adapter::{CreateUserParams, UserAdapter, UserMutation, UserQuery},
};
use entities::sea_orm_active_enums::TokenKind;
use sea_orm::DbConn;
use use_cases::tokens::issue::issue_token;

use crate::{
    users::types::UserVisible,
    utils::{auth::password, emails::send_verification_email, response_409, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct NewUser {
    email: String,
    password: String,
    first_name: String,
}

#[tracing::instrument(name = "Registering a new user", skip(db, req, settings), fields(user_email = &req.email))]
#[post("/register")]
pub async fn register(
    db: Data<DbConn>,
    req: Json<NewUser>,
    settings: Data<Settings>,
) -> HttpResponse {
    match UserAdapter::init(&db).get_by_email(req.email.clone()).await {
        Ok(Some(_)) => return response_409("A user with this email address already exists."),
        Ok(None) => (),
        Err(e) => return response_500(e),
    }

    let hashed_password = password::hash(req.password.as_bytes()).await;
    let user = match UserAdapter::init(&db)
        .create(CreateUserParams {
            email: req.email.clone(),
            password: hashed_password,
            first_name: req.first_name.clone(),
        })
        .await
    {
        Ok(user) => user,
        Err(e) => return response_500(e),
    };

    match issue_token(
        &user,
        TokenKind::EmailVerification,
        ActionTokenAdapter::init(&db),
        Utc::now().into(),
    )
    .await
    {
        Ok(token) => {
            send_verification_email(&user, &token.secret, &settings);
            tracing::event!(target: "backend", tracing::Level::INFO, "New user registered successfully.");
            HttpResponse::Created().json(UserVisible {
                id: user.id,
                email: user.email,
                first_name: user.first_name,
                email_verified: user.email_verified,
            })
        }
        Err(e) => response_500(e),
    }
}
