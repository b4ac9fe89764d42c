mod forgot_password;
mod get_me;
mod login;
mod logout;
mod register;
mod resend_verification;
