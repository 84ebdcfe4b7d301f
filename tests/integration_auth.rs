mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email, setup_test_app, test_jwt_config};
use http_body_util::BodyExt;
use learnhub::modules::users::model::UserRole;
use learnhub::utils::jwt::verify_token;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_success(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let email = generate_unique_email();
    let request = json_request(
        "/api/auth/signup",
        json!({
            "first_name": "Jane",
            "last_name": "Smith",
            "email": email,
            "password": "password123",
            "role": "teacher"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "teacher");
    assert!(body["user"].get("password").is_none());

    // Token claims must decode to the created user's id and role
    let token = body["access_token"].as_str().unwrap();
    let claims = verify_token(token, &test_jwt_config()).unwrap();
    assert_eq!(claims.sub, body["user"]["id"].as_str().unwrap());
    assert_eq!(claims.role, UserRole::Teacher);
    assert_eq!(claims.email, email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_duplicate_email(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "password123", UserRole::Student).await;

    let app = setup_test_app(pool.clone());

    let request = json_request(
        "/api/auth/signup",
        json!({
            "first_name": "Jane",
            "last_name": "Smith",
            "email": email,
            "password": "password123",
            "role": "student"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // No second record was created
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_invalid_email_format(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = json_request(
        "/api/auth/signup",
        json!({
            "first_name": "Jane",
            "last_name": "Smith",
            "email": "not-an-email",
            "password": "password123",
            "role": "student"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_short_password(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = json_request(
        "/api/auth/signup",
        json!({
            "first_name": "Jane",
            "last_name": "Smith",
            "email": generate_unique_email(),
            "password": "short",
            "role": "student"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_missing_field(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = json_request(
        "/api/auth/signup",
        json!({
            "first_name": "Jane",
            "email": generate_unique_email(),
            "password": "password123",
            "role": "student"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_signup_invalid_role(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = json_request(
        "/api/auth/signup",
        json!({
            "first_name": "Jane",
            "last_name": "Smith",
            "email": generate_unique_email(),
            "password": "password123",
            "role": "superuser"
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success(pool: PgPool) {
    let email = generate_unique_email();
    let password = "testpass123";
    create_test_user(&pool, &email, password, UserRole::Student).await;

    let app = setup_test_app(pool.clone());

    let request = json_request(
        "/api/auth/login",
        json!({
            "email": email,
            "password": password
        }),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(body.get("access_token").is_some());
    assert_eq!(body["user"]["email"], email);
    assert!(body["user"].get("password").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_uniform_failure_message(pool: PgPool) {
    let email = generate_unique_email();
    create_test_user(&pool, &email, "correctpass", UserRole::Student).await;

    let app = setup_test_app(pool.clone());

    // Wrong password for a known email
    let response = app
        .clone()
        .oneshot(json_request(
            "/api/auth/login",
            json!({ "email": email, "password": "wrongpass123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body = response.into_body().collect().await.unwrap().to_bytes();
    let wrong_password_body: serde_json::Value =
        serde_json::from_slice(&wrong_password_body).unwrap();

    // Unknown email entirely
    let response = app
        .oneshot(json_request(
            "/api/auth/login",
            json!({ "email": generate_unique_email(), "password": "whatever123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_email_body = response.into_body().collect().await.unwrap().to_bytes();
    let unknown_email_body: serde_json::Value =
        serde_json::from_slice(&unknown_email_body).unwrap();

    // Same message either way, so the response does not reveal which check failed
    assert_eq!(wrong_password_body["error"], unknown_email_body["error"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_missing_password(pool: PgPool) {
    let app = setup_test_app(pool.clone());

    let request = json_request("/api/auth/login", json!({ "email": "test@test.com" }));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
