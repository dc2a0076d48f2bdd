//! Integration tests for API endpoints.
//!
//! Each test builds the real router over a fresh in-memory SQLite
//! database migrated with the production migrations.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde_json::{json, Value};
use tower::ServiceExt;

use business_staff_api::api::{create_router, AppState};
use business_staff_api::config::Config;
use business_staff_api::infra::Database;
use business_staff_api::services::Claims;

const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

// =============================================================================
// Test Helpers
// =============================================================================

async fn test_app() -> Router {
    let mut config = Config::new("sqlite::memory:", TEST_SECRET);
    // Every pooled connection would otherwise get its own empty database
    config.db_max_connections = 1;

    let database = Database::connect(&config)
        .await
        .expect("in-memory database should migrate");

    create_router(AppState::from_config(Arc::new(database), config))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

fn registration(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "password": "SecurePass123",
        "password_confirmation": "SecurePass123",
        "email": email,
        "first_name": "Jane",
        "last_name": "Doe"
    })
}

/// Registers a fresh account and returns its bearer token
async fn register_token(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        None,
        Some(registration("jane_doe", "jane@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["token"].as_str().unwrap().to_string()
}

async fn create_business(app: &Router, token: &str, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/business",
        Some(token),
        Some(json!({ "name": name, "location": "London", "business_type": "bar" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body
}

fn staff_payload(email: &str) -> Value {
    json!({
        "first_name": "Alice",
        "last_name": "Henderson",
        "email": email,
        "job_position": "kitchen",
        "phone_number": "+44 7700 900123"
    })
}

// =============================================================================
// Operational Endpoints
// =============================================================================

#[tokio::test]
async fn test_root_endpoint() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/business/{business_id}/staff"].is_object());
}

// =============================================================================
// Registration & Login
// =============================================================================

#[tokio::test]
async fn test_register_password_mismatch_persists_nothing() {
    let app = test_app().await;
    let mut payload = registration("jane_doe", "jane@example.com");
    payload["password_confirmation"] = json!("Different1234");

    let (status, body) = send(&app, Method::POST, "/users", None, Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Passwords do not match");

    // The same username is still free
    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(registration("jane_doe", "jane@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_duplicate_username_or_email_rejected() {
    let app = test_app().await;
    register_token(&app).await;

    for payload in [
        registration("jane_doe", "other@example.com"),
        registration("someone_else", "jane@example.com"),
    ] {
        let (status, body) = send(&app, Method::POST, "/users", None, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "username or email is already taken");
    }
}

#[tokio::test]
async fn test_register_validation_lists_every_failure() {
    let app = test_app().await;
    let payload = json!({
        "username": "jd",
        "password": "short",
        "password_confirmation": "short",
        "email": "not-an-email",
        "first_name": "Jane",
        "last_name": "Doe"
    });

    let (status, body) = send(&app, Method::POST, "/users", None, Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_login_token_carries_user_id() {
    let app = test_app().await;
    let (status, registered) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(registration("jane_doe", "jane@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(registered["username"], "jane_doe");
    assert!(registered.get("password").is_none());

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        None,
        Some(json!({ "username": "jane_doe", "password": "SecurePass123" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["userId"], registered["userId"]);
    assert_eq!(body["email"], "jane@example.com");

    let claims = decode::<Claims>(
        body["token"].as_str().unwrap(),
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims;
    assert_eq!(Value::from(claims.sub), registered["userId"]);
    assert_eq!(claims.username, "jane_doe");
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let app = test_app().await;
    register_token(&app).await;

    for (username, password) in [("jane_doe", "WrongPass123"), ("nobody_here", "SecurePass123")] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn test_login_missing_credentials_unauthorized() {
    let app = test_app().await;
    register_token(&app).await;

    for payload in [
        json!({}),
        json!({ "username": "jane_doe" }),
        json!({ "username": "", "password": "" }),
    ] {
        let (status, body) = send(&app, Method::POST, "/auth/login", None, Some(payload)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }
}

// =============================================================================
// Business
// =============================================================================

#[tokio::test]
async fn test_create_then_get_business_round_trips() {
    let app = test_app().await;
    let token = register_token(&app).await;
    let created = create_business(&app, &token, "The Crown").await;

    let uri = format!("/business/{}", created["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["business_type"], "bar");
}

#[tokio::test]
async fn test_list_businesses_is_public_and_ordered() {
    let app = test_app().await;
    let token = register_token(&app).await;
    create_business(&app, &token, "First Place").await;
    create_business(&app, &token, "Second Place").await;

    let (status, body) = send(&app, Method::GET, "/business", None, None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First Place", "Second Place"]);
}

#[tokio::test]
async fn test_get_missing_business() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/business/42", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Business not found");
}

#[tokio::test]
async fn test_non_numeric_business_id_rejected() {
    let app = test_app().await;
    let (status, _) = send(&app, Method::GET, "/business/abc", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_business_is_shallow_merge() {
    let app = test_app().await;
    let token = register_token(&app).await;
    let created = create_business(&app, &token, "The Crown").await;
    let uri = format!("/business/{}", created["id"]);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(&token),
        Some(json!({ "location": "Manchester" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "The Crown");
    assert_eq!(updated["location"], "Manchester");
    assert_eq!(updated["business_type"], "bar");
}

#[tokio::test]
async fn test_patch_business_null_clears_type() {
    let app = test_app().await;
    let token = register_token(&app).await;
    let created = create_business(&app, &token, "The Crown").await;
    let uri = format!("/business/{}", created["id"]);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &uri,
        Some(&token),
        Some(json!({ "business_type": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(updated["business_type"].is_null());
    assert_eq!(updated["name"], "The Crown");

    let (_, fetched) = send(&app, Method::GET, &uri, None, None).await;
    assert!(fetched["business_type"].is_null());
}

#[tokio::test]
async fn test_duplicate_business_name_rejected() {
    let app = test_app().await;
    let token = register_token(&app).await;
    create_business(&app, &token, "The Crown").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/business",
        Some(&token),
        Some(json!({ "name": "The Crown", "location": "Leeds" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_invalid_business_rejected() {
    let app = test_app().await;
    let token = register_token(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/business",
        Some(&token),
        Some(json!({ "name": "ab", "location": "London", "business_type": "casino" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_business_cascades_staff() {
    let app = test_app().await;
    let token = register_token(&app).await;
    let business = create_business(&app, &token, "The Crown").await;
    let business_uri = format!("/business/{}", business["id"]);

    let (status, staff) = send(
        &app,
        Method::POST,
        &format!("{}/staff", business_uri),
        Some(&token),
        Some(staff_payload("alice@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let staff_uri = format!("{}/staff/{}", business_uri, staff["id"]);

    let (status, _) = send(&app, Method::DELETE, &business_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &business_uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, &staff_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The freed email can be reused, so the row is really gone
    let other = create_business(&app, &token, "The Anchor").await;
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/business/{}/staff", other["id"]),
        Some(&token),
        Some(staff_payload("alice@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_delete_missing_business() {
    let app = test_app().await;
    let token = register_token(&app).await;

    let (status, _) = send(&app, Method::DELETE, "/business/7", Some(&token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Staff
// =============================================================================

#[tokio::test]
async fn test_staff_for_missing_business_not_created() {
    let app = test_app().await;
    let token = register_token(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/business/999/staff",
        Some(&token),
        Some(staff_payload("alice@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Business not found");

    // No orphan row was written
    let (status, _) = send(&app, Method::GET, "/business/999/staff/1", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/business/999/staff", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_staff_listing_scoped_to_business() {
    let app = test_app().await;
    let token = register_token(&app).await;
    let crown = create_business(&app, &token, "The Crown").await;
    let anchor = create_business(&app, &token, "The Anchor").await;

    for (business, email) in [
        (&crown, "a@example.com"),
        (&crown, "b@example.com"),
        (&anchor, "c@example.com"),
    ] {
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/business/{}/staff", business["id"]),
            Some(&token),
            Some(staff_payload(email)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/business/{}/staff", crown["id"]),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|s| s["business_id"] == crown["id"]));
}

#[tokio::test]
async fn test_patch_staff_is_shallow_merge() {
    let app = test_app().await;
    let token = register_token(&app).await;
    let business = create_business(&app, &token, "The Crown").await;

    let (_, staff) = send(
        &app,
        Method::POST,
        &format!("/business/{}/staff", business["id"]),
        Some(&token),
        Some(staff_payload("alice@example.com")),
    )
    .await;
    let staff_uri = format!("/business/{}/staff/{}", business["id"], staff["id"]);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &staff_uri,
        Some(&token),
        Some(json!({ "job_position": "pr" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["job_position"], "pr");
    assert_eq!(updated["email"], "alice@example.com");
    assert_eq!(updated["phone_number"], "+44 7700 900123");

    let (status, _) = send(&app, Method::DELETE, &staff_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, &staff_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_staff_null_clears_phone_number() {
    let app = test_app().await;
    let token = register_token(&app).await;
    let business = create_business(&app, &token, "The Crown").await;

    let (_, staff) = send(
        &app,
        Method::POST,
        &format!("/business/{}/staff", business["id"]),
        Some(&token),
        Some(staff_payload("alice@example.com")),
    )
    .await;
    let staff_uri = format!("/business/{}/staff/{}", business["id"], staff["id"]);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &staff_uri,
        Some(&token),
        Some(json!({ "phone_number": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(updated["phone_number"].is_null());
    assert_eq!(updated["job_position"], "kitchen");

    let (_, fetched) = send(&app, Method::GET, &staff_uri, Some(&token), None).await;
    assert!(fetched["phone_number"].is_null());
}

#[tokio::test]
async fn test_invalid_phone_number_rejected() {
    let app = test_app().await;
    let token = register_token(&app).await;
    let business = create_business(&app, &token, "The Crown").await;

    let mut payload = staff_payload("alice@example.com");
    payload["phone_number"] = json!("12345");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/business/{}/staff", business["id"]),
        Some(&token),
        Some(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0], "Invalid phone number provided");
}

// =============================================================================
// Bearer Guard
// =============================================================================

#[tokio::test]
async fn test_mutating_endpoints_require_token() {
    let app = test_app().await;

    let cases = [
        (Method::POST, "/business", Some(json!({ "name": "Nope", "location": "Nowhere" }))),
        (Method::PATCH, "/business/1", Some(json!({ "name": "Nope" }))),
        (Method::DELETE, "/business/1", None),
        (Method::GET, "/business/1/staff", None),
        (Method::POST, "/business/1/staff", Some(staff_payload("x@example.com"))),
        (Method::GET, "/business/1/staff/1", None),
        (Method::PATCH, "/business/1/staff/1", Some(json!({ "first_name": "Nope" }))),
        (Method::DELETE, "/business/1/staff/1", None),
    ];

    for (method, uri, body) in cases {
        let (status, _) = send(&app, method.clone(), uri, None, body.clone()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);

        let (status, _) = send(&app, method.clone(), uri, Some("not-a-jwt"), body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {} (bad token)", method, uri);
    }
}

#[tokio::test]
async fn test_token_for_unknown_user_rejected() {
    // Signed with the right secret, but for a user id that was never created
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        username: "ghost_user".into(),
        sub: 404,
        iat: now,
        exp: now + 600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let app = test_app().await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/business",
        Some(&token),
        Some(json!({ "name": "Ghost Bar", "location": "Nowhere" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
