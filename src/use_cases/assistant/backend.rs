use std::{future::Future, time::Duration};

use common::settings::types::AssistantSettings;
use serde_json::Value;

use crate::{error_500, UseCaseError};

pub struct InferenceResponse {
    pub status: u16,
    pub body: String,
}

/// Transport seam for the inference API. The error string is a transport
/// failure description for logging; it never reaches end users.
pub trait InferenceBackend {
    fn send(
        &self,
        api_key: &str,
        payload: &Value,
    ) -> impl Future<Output = Result<InferenceResponse, String>>;
}

pub struct ReqwestBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl ReqwestBackend {
    pub fn new(settings: &AssistantSettings) -> Result<Self, UseCaseError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(error_500)?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }
}

impl InferenceBackend for ReqwestBackend {
    async fn send(&self, api_key: &str, payload: &Value) -> Result<InferenceResponse, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("{:?}", e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| format!("{:?}", e))?;
        Ok(InferenceResponse { status, body })
    }
}
