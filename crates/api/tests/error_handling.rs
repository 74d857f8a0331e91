//! Tests for the mapping of application errors onto HTTP responses.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::body_json;
use relocate_api::error::AppError;
use relocate_core::error::CoreError;
use relocate_db::store::StoreError;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn core_errors_map_to_status_and_code() {
    let cases = [
        (CoreError::not_found("ProgressItem", 7), StatusCode::NOT_FOUND, "NOT_FOUND"),
        (CoreError::Validation("bad".into()), StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        (CoreError::Conflict("dup".into()), StatusCode::CONFLICT, "CONFLICT"),
        (CoreError::Unauthorized("no".into()), StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        (CoreError::Forbidden("off".into()), StatusCode::FORBIDDEN, "FORBIDDEN"),
    ];
    for (err, status, code) in cases {
        let (actual, body) = render(AppError::Core(err)).await;
        assert_eq!(actual, status);
        assert_eq!(body["code"], code);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn not_found_names_the_entity() {
    let (_, body) = render(CoreError::not_found("ProgressItem", 7).into()).await;
    assert_eq!(body["error"], "ProgressItem with id 7 not found");
}

#[tokio::test]
async fn internal_details_are_not_leaked() {
    let (status, body) = render(AppError::InternalError("secret connection string".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"], "An internal error occurred");

    let (status, body) = render(CoreError::Internal("stack".into()).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "An internal error occurred");
}

#[tokio::test]
async fn unreachable_store_is_service_unavailable() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));
    let (status, body) = render(err).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn missing_row_is_not_found() {
    let err = AppError::Store(StoreError::Database(sqlx::Error::RowNotFound));
    let (status, _) = render(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_domain_errors_use_core_mapping() {
    let err = AppError::Store(StoreError::Core(CoreError::Conflict(
        "Username already registered".into(),
    )));
    let (status, body) = render(err).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already registered");
}

#[tokio::test]
async fn bad_request_keeps_message() {
    let (status, body) = render(AppError::BadRequest("expected value".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["error"], "expected value");
}
