use actix_web::{http, test, HttpMessage};
use chrono::Utc;
use entities::{progress, sea_orm_active_enums::ContentKind, user_activity_streak};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::json;

use crate::utils::init_app;
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    for expected_count in 1..=2 {
        let req = test::TestRequest::post()
            .uri("/api/progress/complete")
            .set_json(json!({"contentType": "reading"}))
            .to_request();
        req.extensions_mut().insert(user.clone());
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);

        let record = progress::Entity::find()
            .filter(progress::Column::UserId.eq(user.id))
            .filter(progress::Column::ContentKind.eq(ContentKind::Reading))
            .one(&db)
            .await?
            .expect("progress record should exist");
        assert_eq!(record.completed_count, expected_count);
    }

    // Both completions happened today, so the streak only moves once.
    let streak = user_activity_streak::Entity::find_by_id(user.id)
        .one(&db)
        .await?
        .expect("streak record should exist");
    assert_eq!(streak.streak, 1);
    assert_eq!(streak.last_activity_date, Some(Utc::now().date_naive()));

    Ok(())
}

#[actix_web::test]
async fn content_type_is_case_insensitive() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/progress/complete")
        .set_json(json!({"contentType": "LISTENING"}))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let record = progress::Entity::find()
        .filter(progress::Column::UserId.eq(user.id))
        .filter(progress::Column::ContentKind.eq(ContentKind::Listening))
        .one(&db)
        .await?;
    assert!(record.is_some());

    Ok(())
}

#[actix_web::test]
async fn bad_request_on_unknown_content_type() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/progress/complete")
        .set_json(json!({"contentType": "grammar"}))
        .to_request();
    req.extensions_mut().insert(user.clone());
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let records = progress::Entity::find()
        .filter(progress::Column::UserId.eq(user.id))
        .all(&db)
        .await?;
    assert!(records.is_empty());

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let (app, _, _) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/progress/complete")
        .set_json(json!({"contentType": "reading"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
