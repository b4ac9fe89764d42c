use actix_web::{http, test};
use entities::{action_token, sea_orm_active_enums::TokenKind};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::json;
use uuid::Uuid;

use crate::utils::init_app;
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/forgot-password")
        .set_json(json!({"email": user.email}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let tokens = action_token::Entity::find()
        .filter(action_token::Column::UserId.eq(user.id))
        .filter(action_token::Column::Kind.eq(TokenKind::PasswordReset))
        .all(&db)
        .await?;
    assert_eq!(tokens.len(), 1);
    assert!(!tokens[0].used);

    Ok(())
}

#[actix_web::test]
async fn repeated_requests_share_one_token() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().insert(&db).await?;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/users/forgot-password")
            .set_json(json!({"email": user.email}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::OK);
    }

    let tokens = action_token::Entity::find()
        .filter(action_token::Column::UserId.eq(user.id))
        .all(&db)
        .await?;
    assert_eq!(tokens.len(), 1);

    Ok(())
}

#[actix_web::test]
async fn uniform_response_for_unknown_email() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/forgot-password")
        .set_json(json!({"email": format!("{}@test.com", Uuid::new_v4())}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let tokens = action_token::Entity::find().all(&db).await?;
    assert!(tokens.is_empty());

    Ok(())
}

#[actix_web::test]
async fn no_token_for_unverified_user() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().email_verified(false).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/forgot-password")
        .set_json(json!({"email": user.email}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let tokens = action_token::Entity::find()
        .filter(action_token::Column::UserId.eq(user.id))
        .all(&db)
        .await?;
    assert!(tokens.is_empty());

    Ok(())
}
