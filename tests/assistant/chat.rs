use actix_web::{http, test, HttpMessage};
use sea_orm::{ActiveModelTrait, DbErr};
use serde_json::json;

use crate::utils::init_app;
use common::factory;

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let (app, _, _) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/assistant/chat")
        .set_json(json!({"message": "How do I improve my writing score?"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_blank_message() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/assistant/chat")
        .set_json(json!({"message": "   "}))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
