use actix_web::{http, test};
use sea_orm::DbErr;

use crate::utils::init_app;

#[actix_web::test]
async fn reports_configuration_state() -> Result<(), DbErr> {
    let (app, _, _) = init_app().await?;

    let req = test::TestRequest::get().uri("/api/assistant/status").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert!(body["configured"].is_boolean());
    assert!(body["message"].is_string());

    Ok(())
}
