//! Integration tests for API endpoints.
//!
//! Each test builds its own router over a fresh in-memory store and drives it
//! with `tower::ServiceExt::oneshot`, so no network or shared state is needed.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use gateway_lib::config::GatewayConfig;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> Router {
    create_router(AppState::in_memory(GatewayConfig::default()))
}

fn test_app_with_bulk_delete() -> Router {
    create_router(AppState::in_memory(
        GatewayConfig::default().with_bulk_delete(true),
    ))
}

async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let (status, bytes) = send_raw(app, request).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, name: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

fn user_path(user: &Value) -> String {
    format!("/users/{}", user["id"].as_str().unwrap())
}

fn detail_fields(body: &Value) -> Vec<String> {
    body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_healthcheck() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": "user-service" }));
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_no_user_created_returns_empty_list() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_after_creation_returns_all_users() {
    let app = test_app();
    let user_a = create(&app, "User_A", "email_a@example.com").await;
    let user_b = create(&app, "User_B", "email_b@example.com").await;

    let (status, body) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([user_a, user_b]));
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_response_contains_given_data() {
    let app = test_app();
    let body = create(&app, "User_A", "email_a@example.com").await;

    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert_eq!(body["name"], "User_A");
    assert_eq!(body["email"], "email_a@example.com");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_generates_distinct_ids() {
    let app = test_app();
    let first = create(&app, "User_A", "a@example.com").await;
    let second = create(&app, "User_A", "a@example.com").await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_create_rejects_unknown_field() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "User_A", "email": "email_a@example.com", "age": 42 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(detail_fields(&body), vec!["age"]);
    assert_eq!(body["error"]["details"][0]["reason"], "unknown_field");

    let (_, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn test_create_rejects_empty_and_missing_name() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "", "email": "a@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["reason"], "empty");

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "a@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["details"][0]["reason"], "missing");
}

#[tokio::test]
async fn test_create_reports_every_invalid_field() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "", "email": "nope", "role": "admin" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let mut fields = detail_fields(&body);
    fields.sort();
    assert_eq!(fields, vec!["email", "name", "role"]);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, _) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_rejects_non_object_body() {
    let app = test_app();
    let (status, body) = send(&app, Method::POST, "/users", Some(json!(["User_A"]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_rejects_missing_content_type() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/users")
        .body(Body::from(
            json!({ "name": "User_A", "email": "a@example.com" }).to_string(),
        ))
        .unwrap();

    let (status, _) = send_raw(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Get
// =============================================================================

#[tokio::test]
async fn test_get_user_not_found_responds_with_404() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/users/nouser", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let unknown = format!("/users/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, Method::GET, &unknown, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_exists_responds_with_user_data() {
    let app = test_app();
    let user = create(&app, "User_A", "email_a@example.com").await;

    let (status, body) = send(&app, Method::GET, &user_path(&user), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, user);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_user_not_found_responds_with_404() {
    let app = test_app();
    let (status, _) = send(&app, Method::PUT, "/users/nouser", Some(json!({}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_no_fields_returns_unchanged() {
    let app = test_app();
    let user = create(&app, "User_A", "email_a@example.com").await;

    let (status, body) = send(&app, Method::PUT, &user_path(&user), Some(json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, user);
}

#[tokio::test]
async fn test_update_name() {
    let app = test_app();
    let user = create(&app, "User_A", "email_a@example.com").await;

    let (status, updated) = send(
        &app,
        Method::PUT,
        &user_path(&user),
        Some(json!({ "name": "Renamed_User_A" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, Method::GET, &user_path(&user), None).await;

    assert_eq!(updated, fetched);
    assert_eq!(updated["id"], user["id"]);
    assert_eq!(updated["name"], "Renamed_User_A");
    assert_eq!(updated["email"], "email_a@example.com");
}

#[tokio::test]
async fn test_update_email() {
    let app = test_app();
    let user = create(&app, "User_A", "email_a@example.com").await;

    let (status, updated) = send(
        &app,
        Method::PUT,
        &user_path(&user),
        Some(json!({ "email": "email_a2@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, Method::GET, &user_path(&user), None).await;

    assert_eq!(updated, fetched);
    assert_eq!(updated["name"], "User_A");
    assert_eq!(updated["email"], "email_a2@example.com");
}

#[tokio::test]
async fn test_update_rejects_id_and_other_fields() {
    let app = test_app();
    let user = create(&app, "User_A", "email_a@example.com").await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &user_path(&user),
        Some(json!({ "id": "id42", "age": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let mut fields = detail_fields(&body);
    fields.sort();
    assert_eq!(fields, vec!["age", "id"]);

    let (_, fetched) = send(&app, Method::GET, &user_path(&user), None).await;
    assert_eq!(fetched, user);

    let (status, _) = send(&app, Method::GET, "/users/id42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_invalid_value_does_not_mutate() {
    let app = test_app();
    let user = create(&app, "User_A", "email_a@example.com").await;

    let (status, _) = send(
        &app,
        Method::PUT,
        &user_path(&user),
        Some(json!({ "name": "Renamed", "email": "not-an-email" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, Method::GET, &user_path(&user), None).await;
    assert_eq!(fetched, user);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_user_not_found_responds_with_404() {
    let app = test_app();
    let (status, _) = send(&app, Method::DELETE, "/users/nouser", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_exists_deletes_and_responds_with_204() {
    let app = test_app();
    let user = create(&app, "User_A", "email_a@example.com").await;

    let request = Request::builder()
        .method(Method::DELETE)
        .uri(user_path(&user))
        .body(Body::empty())
        .unwrap();
    let (status, bytes) = send_raw(&app, request).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (_, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn test_delete_unknown_leaves_other_users() {
    let app = test_app();
    let user = create(&app, "User_A", "email_a@example.com").await;

    let unknown = format!("/users/{}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, Method::DELETE, &unknown, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(users, json!([user]));
}

#[tokio::test]
async fn test_create_get_delete_flow() {
    let app = test_app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "name": "User_A", "email": "a@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "User_A");
    assert_eq!(created["email"], "a@example.com");

    let path = user_path(&created);
    let (status, fetched) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, _) = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Bulk delete
// =============================================================================

#[tokio::test]
async fn test_bulk_delete_disabled_by_default() {
    let app = test_app();
    create(&app, "User_A", "email_a@example.com").await;

    let (status, body) = send(&app, Method::DELETE, "/users", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"]["code"], "METHOD_NOT_ALLOWED");

    let (_, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_bulk_delete_when_enabled() {
    let app = test_app_with_bulk_delete();
    create(&app, "User_A", "email_a@example.com").await;
    create(&app, "User_B", "email_b@example.com").await;

    let (status, _) = send(&app, Method::DELETE, "/users", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, users) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(users, json!([]));
}

#[tokio::test]
async fn test_apps_do_not_share_state() {
    let first = test_app();
    let second = test_app();
    create(&first, "User_A", "email_a@example.com").await;

    let (_, users) = send(&second, Method::GET, "/users", None).await;
    assert_eq!(users, json!([]));
}

// =============================================================================
// OpenAPI
// =============================================================================

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/users").is_some());
    assert!(body["paths"].get("/users/{id}").is_some());
}

#[tokio::test]
async fn test_openapi_error_responses_use_error_schema() {
    let app = test_app();
    let (_, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    let error_ref = json!("#/components/schemas/ErrorResponse");
    let schema_of = |path: &str, method: &str, status: &str| {
        body["paths"][path][method]["responses"][status]["content"]["application/json"]["schema"]
            ["$ref"]
            .clone()
    };

    assert_eq!(schema_of("/users", "post", "400"), error_ref);
    assert_eq!(schema_of("/users/{id}", "get", "404"), error_ref);
    assert_eq!(schema_of("/users", "delete", "405"), error_ref);
    assert!(body["components"]["schemas"].get("ErrorResponse").is_some());
}
