use actix_session::SessionMiddleware;
use actix_web::{dev::Server, web::Data, App, HttpServer};
use common::{db::init_db, settings::types::Settings};
use sea_orm::DbConn;
use server::{get_preps_for_redis_session_store, get_routes, setup_session_middleware_builder};
use use_cases::assistant::{backend::ReqwestBackend, client::AssistantClient};
use web_adapters::auth_middleware::AuthenticateUser;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = init_db(&settings).await;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, db, settings).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn run(
    listener: std::net::TcpListener,
    db: DbConn,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let (redis_store, secret_key) =
        get_preps_for_redis_session_store(&settings, &settings.redis.url).await;

    let assistant_backend =
        ReqwestBackend::new(&settings.assistant).expect("Failed to build the assistant HTTP client.");
    let assistant = Data::new(AssistantClient::init(
        assistant_backend,
        &settings.assistant.api_key,
    ));

    let db = Data::new(db);
    let settings_data = Data::new(settings.clone());
    let server = HttpServer::new(move || {
        App::new()
            .wrap(AuthenticateUser)
            .wrap(
                setup_session_middleware_builder(
                    SessionMiddleware::builder(redis_store.clone(), secret_key.clone()),
                    &settings,
                )
                .build(),
            )
            .service(get_routes())
            .app_data(db.clone())
            .app_data(settings_data.clone())
            .app_data(assistant.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
