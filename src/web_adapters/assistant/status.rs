use actix_web::{get, web::Data, HttpResponse};
use use_cases::assistant::{
    backend::ReqwestBackend, client::AssistantClient, types::AssistantStatusResponse,
};

#[get("/status")]
pub async fn status(assistant: Data<AssistantClient<ReqwestBackend>>) -> HttpResponse {
    let configured = assistant.is_configured();
    let message = if configured {
        "Assistant configured"
    } else {
        "Assistant not configured; set HF_API_KEY to enable"
    };
    HttpResponse::Ok().json(AssistantStatusResponse {
        configured,
        message: message.to_string(),
    })
}
