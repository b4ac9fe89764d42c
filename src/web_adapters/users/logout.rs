use actix_web::{post, HttpResponse};

use crate::utils::{auth::session::get_user_id, response_400};

#[tracing::instrument(name = "Log out user", skip(session))]
#[post("/logout")]
pub async fn log_out(session: actix_session::Session) -> HttpResponse {
    match get_user_id(&session).await {
        Ok(_) => {
            session.purge();
            HttpResponse::Ok().json("You have successfully logged out")
        }
        Err(_) => response_400(
            "We currently have some issues. Kindly try again and ensure you are logged in.",
        ),
    }
}
