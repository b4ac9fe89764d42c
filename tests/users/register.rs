use actix_web::{http, test};
use entities::{action_token, sea_orm_active_enums::TokenKind, user};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::json;
use uuid::Uuid;

use crate::utils::init_app;
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let email = format!("{}@test.com", Uuid::new_v4());

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "email": email,
            "password": "password",
            "first_name": "Aruzhan",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["email"], email);
    assert_eq!(body["first_name"], "Aruzhan");
    assert_eq!(body["email_verified"], false);

    let created_user = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(&db)
        .await?
        .expect("user should have been created");
    assert!(!created_user.email_verified);
    assert!(created_user.password.starts_with("$argon2id$"));

    let token = action_token::Entity::find()
        .filter(action_token::Column::UserId.eq(created_user.id))
        .one(&db)
        .await?
        .expect("verification token should have been created");
    assert_eq!(token.kind, TokenKind::EmailVerification);
    assert!(!token.used);

    Ok(())
}

#[actix_web::test]
async fn conflict_on_duplicate_email() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let existing = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(json!({
            "email": existing.email,
            "password": "password",
            "first_name": "Aruzhan",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::CONFLICT);

    let user_count = user::Entity::find()
        .filter(user::Column::Email.eq(existing.email))
        .all(&db)
        .await?
        .len();
    assert_eq!(user_count, 1);

    Ok(())
}
