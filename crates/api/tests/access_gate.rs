//! Integration tests for the `X-API-Key` access gate.
//!
//! Rejected requests must answer 401 before any handler runs, so each test
//! also checks the table was left untouched.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, category_count, send};
use serde_json::json;
use sqlx::PgPool;

fn create_request(api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/categories")
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder
        .body(Body::from(json!({"name": "Gadget"}).to_string()))
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_api_key_returns_401_without_side_effects(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = send(app, create_request(Some("SALAH"))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json, json!({"code": 401, "status": "Unauthorized"}));
    assert_eq!(category_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_api_key_returns_401_without_side_effects(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = send(app, create_request(None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "Unauthorized");
    assert_eq!(category_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_key_match_is_case_sensitive(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = send(app, create_request(Some("rahasia"))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(category_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gate_runs_before_path_parsing(pool: PgPool) {
    let app = build_test_app(pool);
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/categories/not-a-number")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_without_key_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let request = Request::builder()
        .uri("/api/categories")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_correct_key_is_accepted(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = send(app, create_request(Some(common::TEST_API_KEY))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(category_count(&pool).await, 1);
}

fn get_request(uri: &str, api_key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::empty()).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_api_path_without_key_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send(app, get_request("/api/other", None)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json, json!({"code": 401, "status": "Unauthorized"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_nested_path_with_wrong_key_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send(app, get_request("/api/categories/1/x", Some("WRONG"))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_api_path_with_key_returns_404_envelope(pool: PgPool) {
    let app = build_test_app(pool);
    let response = send(app, get_request("/api/other", Some(common::TEST_API_KEY))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json, json!({"code": 404, "status": "Not Found"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unsupported_method_without_key_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/api/categories")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
