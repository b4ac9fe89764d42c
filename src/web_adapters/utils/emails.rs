use common::settings::types::Settings;
use entities::user;
use lettre::{
    message::header::ContentType,
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        PoolConfig,
    },
    Message, SmtpTransport, Transport,
};

/// Emails the account-verification link. The link carries the raw token
/// secret and expires with the token, 24 hours after issuance.
pub fn send_verification_email(user: &user::Model, secret: &str, settings: &Settings) {
    let link = format!(
        "{}/verify-email?token={}",
        settings.application.frontend_url, secret
    );
    let body = format!(
        "Hi {},\n\nWelcome to IELTS Prep! Please confirm your email address by opening the link below. The link expires in 24 hours.\n\n{}\n\nIf you did not create this account, you can ignore this email.",
        user.first_name, link
    );
    _spawn_email(
        user,
        "Verify your IELTS Prep account".to_string(),
        body,
        settings,
    );
}

/// Emails the password-reset link. The token behind it is valid for
/// 15 minutes and a single use.
pub fn send_password_reset_email(user: &user::Model, secret: &str, settings: &Settings) {
    let link = format!(
        "{}/reset-password?token={}",
        settings.application.frontend_url, secret
    );
    let body = format!(
        "Hi {},\n\nWe received a request to reset your IELTS Prep password. Open the link below to choose a new one. The link expires in 15 minutes and can be used once.\n\n{}\n\nIf you did not request this, you can ignore this email.",
        user.first_name, link
    );
    _spawn_email(
        user,
        "Reset your IELTS Prep password".to_string(),
        body,
        settings,
    );
}

/// Fire-and-forget: delivery failures are logged, never surfaced to the
/// request that triggered the email.
fn _spawn_email(user: &user::Model, subject: String, body: String, settings: &Settings) {
    let recipient_email = user.email.clone();
    let recipient_first_name = user.first_name.clone();
    let settings = settings.clone();
    actix_web::rt::spawn(async move {
        if let Err(e) =
            send_email(recipient_email, recipient_first_name, subject, body, &settings).await
        {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Could not send email: {}", e);
        }
    });
}

#[tracing::instrument(
    name = "Generic e-mail sending function.",
    skip(subject, body, settings),
    fields(recipient_email = %recipient_email, recipient_first_name = %recipient_first_name)
)]
pub async fn send_email(
    recipient_email: String,
    recipient_first_name: String,
    subject: String,
    body: String,
    settings: &Settings,
) -> Result<(), String> {
    if settings.email.no_verify {
        tracing::event!(target: "backend", tracing::Level::INFO, "Email sending is disabled; skipping.");
        return Ok(());
    }

    let email = Message::builder()
        .from(settings.email.sender.parse().map_err(|e| {
            format!("Failed to parse sender mailbox setting: {:#?}", e)
        })?)
        .to(format!("{} <{}>", recipient_first_name, recipient_email)
            .parse()
            .map_err(|e| format!("Failed to parse recipient mailbox: {:#?}", e))?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body)
        .map_err(|e| format!("Failed to build email: {:#?}", e))?;

    let credentials = Credentials::new(
        settings.email.host_user.clone(),
        settings.email.host_user_password.clone(),
    );
    let sender = SmtpTransport::starttls_relay(&settings.email.host)
        .map_err(|e| format!("Failed to build SMTP transport: {:#?}", e))?
        .credentials(credentials)
        .authentication(vec![Mechanism::Plain])
        .pool_config(PoolConfig::new().max_size(20))
        .build();

    match sender.send(&email) {
        Ok(_) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Email successfully sent!");
            Ok(())
        }
        Err(e) => Err(format!("Could not send email: {:#?}", e)),
    }
}
