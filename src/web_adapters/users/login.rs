use actix_session::SessionInsertError;
use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::user_adapter::{UserAdapter, UserFilter, UserQuery};
use sea_orm::DbConn;

use crate::{
    users::types::{UserVisible, USER_EMAIL_KEY, USER_ID_KEY},
    utils::{auth::password::verify_password, response_404, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
pub struct LoginUser {
    email: String,
    password: String,
}

#[tracing::instrument(name = "Logging a user in", skip(db, req_user, session), fields(user_email = &req_user.email))]
#[post("/login")]
pub async fn login_user(
    db: Data<DbConn>,
    req_user: Json<LoginUser>,
    session: actix_session::Session,
) -> HttpResponse {
    let not_found_message = "A user with these details does not exist. If you registered with these details, ensure you verify your email address by clicking on the link sent to it.";
    match UserAdapter::init(&db)
        .filter_eq_email_verified(true)
        .get_by_email(req_user.email.clone())
        .await
    {
        Ok(Some(user)) => {
            match verify_password(&user.password, req_user.password.as_bytes()) {
                Ok(_) => {
                    tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
                    match renew_session(session, user.id, user.email.clone()) {
                        Ok(_) => HttpResponse::Ok().json(UserVisible {
                            id: user.id,
                            email: user.email,
                            first_name: user.first_name,
                            email_verified: user.email_verified,
                        }),
                        Err(e) => response_500(e),
                    }
                }
                Err(_) => response_404(not_found_message),
            }
        }
        Ok(None) => response_404(not_found_message),
        Err(e) => response_500(e),
    }
}

fn renew_session(
    session: actix_session::Session,
    id: uuid::Uuid,
    email: String,
) -> Result<(), SessionInsertError> {
    session.renew();
    session.insert(USER_ID_KEY, id)?;
    session.insert(USER_EMAIL_KEY, email)?;
    Ok(())
}
