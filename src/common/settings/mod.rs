use std::env;

use crate::settings::types::{
    ApplicationSettings, AssistantSettings, DatabaseSettings, EmailSettings, Environment,
    RedisSettings, SecretSettings, Settings,
};

pub mod types;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_ASSISTANT_ENDPOINT: &str =
    "https://router.huggingface.co/models/tiiuae/falcon-7b-instruct";

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e.to_string()))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => get_development_settings(),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

pub fn get_test_settings() -> Settings {
    get_settings(".env.testing").expect("Error on getting settings.")
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "https".to_string(),
            host: "0.0.0.0".to_string(),
            base_url: "".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            frontend_url: env::var("APP_FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            ..s.application
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        redis: RedisSettings {
            url: get_env_var("REDIS_URL")?,
        },
        secret: SecretSettings {
            hmac_secret: get_env_var("APP_SECRET__HMAC_SECRET")?,
        },
        email: EmailSettings {
            no_verify: match env::var("APP_EMAIL__NO_VERIFY") {
                Ok(no_verify) => &no_verify == "true",
                Err(_) => s.email.no_verify,
            },
            host: get_env_var("APP_EMAIL__HOST")?,
            host_user: get_env_var("APP_EMAIL__HOST_USER")?,
            host_user_password: get_env_var("APP_EMAIL__HOST_USER_PASSWORD")?,
            sender: get_env_var("APP_EMAIL__SENDER")?,
        },
        assistant: AssistantSettings {
            api_key: env::var("APP_ASSISTANT__API_KEY").unwrap_or_default(),
            endpoint: env::var("APP_ASSISTANT__ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ASSISTANT_ENDPOINT.to_string()),
            timeout_seconds: match env::var("APP_ASSISTANT__TIMEOUT_SECONDS") {
                Ok(timeout) => timeout.parse::<u64>().map_err(|e| e.to_string())?,
                Err(_) => 30,
            },
        },
    })
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| e.to_string())
}
