//! Router-level validation tests
//!
//! These run against a lazily-connecting pool pointed at an unreachable
//! address: every request here must be rejected (or answered) before any
//! database access, so the suite needs no running PostgreSQL.

mod common;

use axum::http::StatusCode;
use common::{body_json, empty_request, json_request, lazy_app};
use serde_json::json;
use tower::ServiceExt as _;

#[tokio::test]
async fn test_get_author_non_numeric_id_is_400() {
    let app = lazy_app();

    let response = app
        .oneshot(empty_request("GET", "/author/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "id must be a number");
}

#[tokio::test]
async fn test_get_author_non_positive_id_is_400() {
    let app = lazy_app();

    let response = app
        .oneshot(empty_request("GET", "/author/0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "id must be a positive number");
}

#[tokio::test]
async fn test_create_author_missing_email_is_400() {
    let app = lazy_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/author",
            json!({
                "name": "Ada Lovelace",
                "authorName": "ada",
                "password": "difference engine"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("email"), "unexpected message: {message}");
}

#[tokio::test]
async fn test_create_author_short_password_is_400() {
    let app = lazy_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/author",
            json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "authorName": "ada",
                "password": "seven77"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "password length must be at least 8 characters long"
    );
}

#[tokio::test]
async fn test_update_list_long_tag_is_400() {
    let app = lazy_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/list/5",
            json!({
                "name": "Favorites",
                "tag": "x".repeat(101)
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "tag length must be at most 100 characters");
}

#[tokio::test]
async fn test_create_entry_non_positive_list_id_is_400() {
    let app = lazy_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/entry",
            json!({
                "statement": "Talk is cheap. Show me the code.",
                "listId": -1,
                "enteredById": 2,
                "statedById": 3,
                "color": "red"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "listId must be a positive number");
}

#[tokio::test]
async fn test_create_list_malformed_json_is_400() {
    let app = lazy_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/list")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = lazy_app();

    let response = app
        .oneshot(empty_request("GET", "/nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_health_reports_degraded_without_database() {
    let app = lazy_app();

    let response = app
        .oneshot(empty_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "disconnected");
}
