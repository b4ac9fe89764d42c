use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use serde_json::json;
use uuid::Uuid;

use crate::utils::init_app;
use common::factory::{self, *};

const HASHED_PASSWORD: &str = "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({"email": user.email, "password": "password"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["email"], user.email);
    assert_eq!(body["first_name"], user.first_name);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_incorrect_password() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user().password(HASHED_PASSWORD).insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({"email": user.email, "password": "passworda"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unverified_email() -> Result<(), DbErr> {
    let (app, db, _) = init_app().await?;
    let user = factory::user()
        .password(HASHED_PASSWORD)
        .email_verified(false)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({"email": user.email, "password": "password"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_unknown_email() -> Result<(), DbErr> {
    let (app, _, _) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({
            "email": format!("{}@test.com", Uuid::new_v4()),
            "password": "password",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
