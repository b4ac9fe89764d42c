use actix_web::web::{scope, ServiceConfig};

mod chat;
mod status;

pub fn assistant_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/assistant")
            .service(chat::chat)
            .service(status::status),
    );
}
