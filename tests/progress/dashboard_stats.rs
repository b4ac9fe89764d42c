use actix_web::{http, test, HttpMessage};
use chrono::Utc;
use entities::sea_orm_active_enums::ContentKind;
use sea_orm::{ActiveModelTrait, DbErr};

use crate::utils::init_app;
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().insert(&db).await?;
    factory::progress(user.id)
        .content_kind(ContentKind::Reading)
        .completed_count(3)
        .insert(&db)
        .await?;
    factory::progress(user.id)
        .content_kind(ContentKind::Listening)
        .completed_count(2)
        .insert(&db)
        .await?;
    factory::user_activity_streak(user.id)
        .streak(4)
        .last_activity_date(Some(Utc::now().date_naive()))
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/api/progress/dashboard-stats")
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["exercisesCompleted"], 5);
    assert_eq!(body["hoursPracticed"], 2.5);
    assert_eq!(body["vocabularyWords"], 40);
    assert_eq!(body["dayStreak"], 4);

    Ok(())
}

#[actix_web::test]
async fn zeroes_for_a_new_user() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/progress/dashboard-stats")
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["exercisesCompleted"], 0);
    assert_eq!(body["hoursPracticed"], 0.0);
    assert_eq!(body["vocabularyWords"], 0);
    assert_eq!(body["dayStreak"], 0);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let (app, _, _) = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/progress/dashboard-stats")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
