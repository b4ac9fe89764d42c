use actix_web::{
    post,
    web::{Data, Json, ReqData},
    HttpResponse,
};
use entities::user as user_entity;
use use_cases::{
    assistant::{
        backend::ReqwestBackend,
        client::AssistantClient,
        types::{AssistantChatRequest, AssistantChatResponse},
    },
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_500};

#[tracing::instrument(name = "Relaying a chat message to the assistant", skip(user, assistant, req))]
#[post("/chat")]
pub async fn chat(
    user: Option<ReqData<user_entity::Model>>,
    req: Json<AssistantChatRequest>,
    assistant: Data<AssistantClient<ReqwestBackend>>,
) -> HttpResponse {
    if user.is_none() {
        return response_401();
    }
    let message = req.message.trim();
    if message.is_empty() {
        return response_400("A message is required.");
    }

    match assistant.chat(message).await {
        Ok(reply) => HttpResponse::Ok().json(AssistantChatResponse { reply }),
        Err(UseCaseError::NotConfigured(_)) => {
            tracing::event!(target: "backend", tracing::Level::WARN, "Assistant called but not configured.");
            HttpResponse::ServiceUnavailable().json(AssistantChatResponse {
                reply: "Assistant not available - server not configured.".to_string(),
            })
        }
        Err(e) => response_500(e),
    }
}
