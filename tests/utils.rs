use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    test,
    web::Data,
    App,
};
use common::settings::{get_test_settings, types::Settings};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};
use use_cases::assistant::{backend::ReqwestBackend, client::AssistantClient};

pub async fn init_app() -> Result<
    (
        impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
        DbConn,
        Settings,
    ),
    DbErr,
> {
    let settings = get_test_settings();
    let db = init_db(&settings).await?;
    let assistant = Data::new(AssistantClient::init(
        ReqwestBackend::new(&settings.assistant).expect("Failed to build the assistant client."),
        &settings.assistant.api_key,
    ));
    let app = test::init_service(
        App::new()
            .service(server::get_routes())
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(settings.clone()))
            .app_data(assistant),
    )
    .await;
    Ok((app, db, settings))
}

async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    // A single pooled connection keeps the in-memory sqlite database alive
    // for the whole test.
    let mut options = ConnectOptions::new(settings.database.url.as_str());
    options.max_connections(1);
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
