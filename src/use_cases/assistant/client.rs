use std::time::Duration;

use serde_json::{json, Value};

use crate::{
    assistant::{
        backend::{InferenceBackend, InferenceResponse},
        key::resolve_api_key,
    },
    UseCaseError,
};

const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF: Duration = Duration::from_millis(500);

const SYSTEM_PROMPT: &str = "You are an assistant for the IELTS Prep web application. Only answer questions about how to use the app and the app's features (notes, tests, readings, listening, navigation). If the user asks something unrelated to the app, politely say you can only help with app usage and suggest they consult external resources. Keep answers short and factual. Do not hallucinate features or claim the app does things it does not.";

const WARMING_UP_MESSAGE: &str = "Assistant is warming up, please try again in a few seconds.";
const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "Assistant is currently unavailable (unexpected response from LLM).";
const INTERNAL_ERROR_MESSAGE: &str =
    "Assistant is currently unavailable due to an internal error. Please try again later.";

pub struct AssistantClient<B: InferenceBackend> {
    backend: B,
    api_key: Option<String>,
    backoff_base: Duration,
}

impl<B: InferenceBackend> AssistantClient<B> {
    pub fn init(backend: B, configured_key: &str) -> Self {
        Self {
            backend,
            api_key: resolve_api_key(configured_key),
            backoff_base: BASE_BACKOFF,
        }
    }

    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Upstream failures degrade to a user-facing `Ok` message. The only
    /// error this returns is `NotConfigured`, raised before any network call.
    pub async fn chat(&self, message: &str) -> Result<String, UseCaseError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            UseCaseError::NotConfigured("Assistant API key is not configured.".to_string())
        })?;
        let payload = json!({ "inputs": format!("{}\n\nUser: {}", SYSTEM_PROMPT, message) });

        let mut backoff = self.backoff_base;
        let mut attempts = 0;
        loop {
            attempts += 1;
            let response = match self.backend.send(api_key, &payload).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!("Assistant transport failure: {}", e);
                    return Ok(INTERNAL_ERROR_MESSAGE.to_string());
                }
            };

            if (200..300).contains(&response.status) {
                return Ok(_extract_reply(&response.body));
            }
            if _is_warming_up(&response) {
                tracing::info!("Assistant model is loading; status={}", response.status);
                return Ok(WARMING_UP_MESSAGE.to_string());
            }

            let transient = response.status == 429 || (500..600).contains(&response.status);
            if transient && attempts < MAX_ATTEMPTS {
                tracing::warn!(
                    "Transient assistant response (status={}), retrying after {:?}",
                    response.status,
                    backoff
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
                continue;
            }

            tracing::error!(
                "Assistant upstream error: status={} body={}",
                response.status,
                response.body
            );
            return Ok(format!(
                "Assistant is currently unavailable (upstream error: {}).",
                response.status
            ));
        }
    }
}

fn _is_warming_up(response: &InferenceResponse) -> bool {
    response.status == 503 || response.body.to_lowercase().contains("loading")
}

fn _extract_reply(body: &str) -> String {
    if let Ok(root) = serde_json::from_str::<Value>(body) {
        if let Some(first) = root.as_array().and_then(|items| items.first()) {
            if let Some(text) = first.get("generated_text").and_then(Value::as_str) {
                return text.trim().to_string();
            }
            if let Some(text) = first.get("text").and_then(Value::as_str) {
                return text.trim().to_string();
            }
            if let Some(text) = first.as_str() {
                return text.trim().to_string();
            }
        }
        if let Some(text) = root.get("generated_text").and_then(Value::as_str) {
            return text.trim().to_string();
        }
    }
    let raw = body.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }
    UNEXPECTED_RESPONSE_MESSAGE.to_string()
}
