use actix_web::web::{scope, ServiceConfig};

mod forgot_password;
mod get_user;
mod login;
mod logout;
mod register;
mod resend_verification;
mod reset_password;
pub mod types;
mod verify_email;

pub fn auth_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(register::register)
            .service(verify_email::verify_email)
            .service(resend_verification::resend_verification)
            .service(forgot_password::forgot_password)
            .service(reset_password::reset_password)
            .service(login::login_user)
            .service(logout::log_out)
            .service(get_user::get_user),
    );
}
