//! End-to-end user flows over the HTTP surface: register, login, authorized
//! CRUD, and the failure statuses clients depend on.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use serde_json::{Value, json};

use stockyard_backend::server::{AppConfig, AppContext, build_app};

fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".parse().expect("loopback address"),
        jwt_secret: "integration-secret".to_owned(),
        jwt_expiry_secs: 3600,
        // Minimum cost keeps the suite fast.
        bcrypt_cost: 4,
        seed_default_account: false,
    }
}

async fn test_app()
-> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let ctx = web::Data::new(AppContext::new(&test_config()));
    actix_test::init_service(build_app(ctx)).await
}

async fn register(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    username: &str,
    email: &str,
    password: &str,
) -> Value {
    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": username,
            "emailAddress": email,
            "password": password,
        }))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    actix_test::read_body_json(response).await
}

async fn login(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    username: &str,
    password: &str,
) -> String {
    let request = actix_test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    let response = actix_test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    body["token"].as_str().expect("token string").to_owned()
}

#[actix_rt::test]
async fn register_login_and_fetch_round_trip() {
    let app = test_app().await;

    let created = register(&app, "Tester", "tester@test.com", "hello123").await;
    let user_id = created["userId"].as_str().expect("external id");
    assert_eq!(user_id.len(), 24);
    assert!(created.get("password").is_none());
    assert!(created.get("id").is_none());

    let token = login(&app, "Tester", "hello123").await;

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = actix_test::read_body_json(response).await;
    assert_eq!(fetched["userId"], json!(user_id));
    assert_eq!(fetched["username"], json!("Tester"));
    assert_eq!(fetched["emailAddress"], json!("tester@test.com"));
    assert!(fetched.get("password").is_none());
}

#[actix_rt::test]
async fn protected_routes_require_a_bearer_token() {
    let app = test_app().await;
    register(&app, "Tester", "tester@test.com", "hello123").await;

    let request = actix_test::TestRequest::get().uri("/api/users").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = actix_test::TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn lookup_failures_map_to_conventional_statuses() {
    let app = test_app().await;
    register(&app, "Tester", "tester@test.com", "hello123").await;
    let token = login(&app, "Tester", "hello123").await;

    // Absent but well-formed identifier.
    let request = actix_test::TestRequest::get()
        .uri("/api/users/507f1f77bcf86cd799439011")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Malformed identifier never reaches the store.
    let request = actix_test::TestRequest::get()
        .uri("/api/users/10")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], json!("invalid_request"));
}

#[actix_rt::test]
async fn login_failures_are_indistinguishable() {
    let app = test_app().await;
    register(&app, "Tester", "tester@test.com", "hello123").await;

    let wrong_password = actix_test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "username": "Tester", "password": "wrong-password" }))
        .to_request();
    let response = actix_test::call_service(&app, wrong_password).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body: Value = actix_test::read_body_json(response).await;

    let unknown_user = actix_test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(json!({ "username": "NoSuchUser", "password": "wrong-password" }))
        .to_request();
    let response = actix_test::call_service(&app, unknown_user).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown_user_body: Value = actix_test::read_body_json(response).await;

    // Same status, same body: usernames are not enumerable.
    assert_eq!(wrong_password_body, unknown_user_body);
}

#[actix_rt::test]
async fn validation_failures_list_the_offending_fields() {
    let app = test_app().await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "Tester",
            "emailAddress": "tester@test.com",
            "password": "short",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(body["details"]["violations"][0]["field"], json!("password"));
}

#[actix_rt::test]
async fn malformed_json_is_a_bad_request() {
    let app = test_app().await;

    let request = actix_test::TestRequest::post()
        .uri("/api/users")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn update_rejects_a_mismatched_body_identifier() {
    let app = test_app().await;
    let created = register(&app, "Tester", "tester@test.com", "hello123").await;
    let user_id = created["userId"].as_str().expect("external id");
    let token = login(&app, "Tester", "hello123").await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "userId": "507f1f77bcf86cd799439011",
            "username": "Tester",
            "emailAddress": "tester@test.com",
            "password": "hello123",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn update_replaces_the_record() {
    let app = test_app().await;
    let created = register(&app, "Tester2", "tester2@test.com", "hello321").await;
    let user_id = created["userId"].as_str().expect("external id");
    let token = login(&app, "Tester2", "hello321").await;

    let request = actix_test::TestRequest::put()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "username": "Tester2",
            "emailAddress": "testee@test.com",
            "password": "hello321",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(response).await;
    assert_eq!(updated["emailAddress"], json!("testee@test.com"));
    assert_eq!(updated["userId"], json!(user_id));

    // Old token still works; the account itself still exists.
    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let fetched: Value = actix_test::read_body_json(response).await;
    assert_eq!(fetched["emailAddress"], json!("testee@test.com"));
}

#[actix_rt::test]
async fn delete_returns_the_record_then_goes_not_found() {
    let app = test_app().await;
    let created = register(&app, "Tester", "tester@test.com", "hello123").await;
    let user_id = created["userId"].as_str().expect("external id");
    let token = login(&app, "Tester", "hello123").await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Value = actix_test::read_body_json(response).await;
    assert_eq!(deleted["userId"], json!(user_id));
    assert_eq!(deleted["username"], json!("Tester"));

    // Idempotent failure: deleting again is NotFound, not a crash. The
    // second call needs a fresh principal because the first removed ours.
    register(&app, "Other", "other@test.com", "hello123").await;
    let other_token = login(&app, "Other", "hello123").await;
    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(("Authorization", format!("Bearer {other_token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn tokens_for_deleted_users_stop_working() {
    let app = test_app().await;
    let created = register(&app, "Tester", "tester@test.com", "hello123").await;
    let user_id = created["userId"].as_str().expect("external id");
    let token = login(&app, "Tester", "hello123").await;

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/users/{user_id}"))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The token verifies cryptographically but its subject is gone;
    // indistinguishable from a bad token.
    let request = actix_test::TestRequest::get()
        .uri("/api/users")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
