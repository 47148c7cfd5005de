//! Tests for `AppError` to HTTP response mapping. Each case calls
//! `IntoResponse` directly; only the unique-violation case needs a database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use backoffice_api::error::AppError;
use backoffice_core::error::CoreError;
use backoffice_core::import::{ImportRow, PreparedRow};
use backoffice_core::marketplace::COCOBLU;
use backoffice_db::repositories::MarketplaceRepo;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn http_not_found_keeps_message() {
    let (status, json) =
        error_to_response(AppError::NotFound("SKU code not found".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "SKU code not found");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("No data provided".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "No data provided");
}

#[tokio::test]
async fn validation_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("bad email".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unauthorized_returns_401() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Unauthorized(
        "Invalid email or password".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid email or password");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("pool exhausted at 10.0.0.3".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");

    let (status, _) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_violation_maps_to_conflict(pool: PgPool) {
    let row: ImportRow = json!({ "ASIN": "R1", "MRP": 99 }).as_object().cloned().unwrap();
    let rows = vec![PreparedRow {
        key: "R1".into(),
        row,
        barcode: Some("iVBORw0KGgo=".into()),
    }];

    MarketplaceRepo::insert_rows(&pool, &COCOBLU, &rows, Utc::now())
        .await
        .unwrap();
    let err = MarketplaceRepo::insert_rows(&pool, &COCOBLU, &rows, Utc::now())
        .await
        .unwrap_err();

    let (status, json) = error_to_response(AppError::Database(err)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert!(!json["error"].as_str().unwrap().contains("uq_"));
}
