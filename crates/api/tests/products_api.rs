//! HTTP-level tests for the product catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed(app: axum::Router) {
    let response = post_json(
        app,
        "/api/products/upload-chunk",
        json!({ "data": [
            { "corporatecode": "CC-1", "skucode": "SKU-1", "mrp": 499, "imageurl": "http://img/1" },
            { "corporatecode": "CC-2", "skucode": "SKU-2" }
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["inserted"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_then_list_and_get(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(app.clone()).await;

    let response = get(app.clone(), "/api/products/get-data").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    let response = get(app.clone(), "/api/products/CC-1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let product = body_json(response).await;
    assert_eq!(product["skucode"], "SKU-1");
    assert_eq!(product["mrp"], "499");

    let response = get(app, "/api/products/NOPE").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Product not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_corporate_code_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(app.clone()).await;

    let response = post_json(
        app,
        "/api/products/upload-chunk",
        json!({ "data": [{ "corporatecode": "CC-2", "skucode": "other" }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["error"], "Duplicate in database");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_keeps_unsent_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(app.clone()).await;

    let response = put_json(
        app.clone(),
        "/api/products/update/CC-1",
        json!({ "imageurl": "http://img/new" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Product updated successfully"
    );

    let product = body_json(get(app.clone(), "/api/products/CC-1").await).await;
    assert_eq!(product["imageurl"], "http://img/new");
    assert_eq!(product["skucode"], "SKU-1");

    let response = put_json(app, "/api/products/update/NOPE", json!({ "skucode": "x" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_product(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(app.clone()).await;

    let response = delete(app.clone(), "/api/products/CC-2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Product deleted successfully"
    );

    let response = delete(app, "/api/products/CC-2").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
