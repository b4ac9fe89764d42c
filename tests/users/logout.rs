use actix_web::{http, test};
use sea_orm::DbErr;

use crate::utils::init_app;

#[actix_web::test]
async fn bad_request_without_session() -> Result<(), DbErr> {
    let (app, _, _) = init_app().await?;

    let req = test::TestRequest::post().uri("/api/users/logout").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
