//! HTTP-level tests for dispatch entries, printed labels and the dashboard.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn seed_product(app: axum::Router) {
    let response = post_json(
        app,
        "/api/products/upload-chunk",
        json!({ "data": [{ "corporatecode": "CC-7", "skucode": "SKU-7", "mrp": "650" }] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_dispatch_records_caller(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_product(app.clone()).await;
    let token = common::signup_token(app.clone(), "desk@example.com").await;

    let response = post_json_auth(
        app.clone(),
        "/api/dispatch/savedispatch",
        json!({ "corporateCode": "CC-7", "skuCode": "SKU-7" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["message"],
        "Dispatch created successfully"
    );

    let list = body_json(get(app, "/api/dispatch/dispatches").await).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["useremail"], "desk@example.com");
    assert_eq!(list[0]["mrp"], "650", "catalog MRP fills a missing scan value");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_dispatch_requires_known_product(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::signup_token(app.clone(), "desk@example.com").await;

    let response = post_json_auth(
        app,
        "/api/dispatch/savedispatch",
        json!({ "corporateCode": "CC-0", "skuCode": "SKU-0", "mrp": 10 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Product not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn product_lookups_for_scanning(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_product(app.clone()).await;

    let response = get(app.clone(), "/api/dispatch/CC-7/SKU-7").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["corporatecode"], "CC-7");

    let response = get(app.clone(), "/api/dispatch/CC-7/OTHER").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "SKU code does not exist for the given corporate code"
    );

    let response = get(app.clone(), "/api/dispatch/sku/SKU-7").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["skucode"], "SKU-7");

    let response = get(app, "/api/dispatch/sku/NONE").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "SKU code not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn print_details_are_logged(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = common::signup_token(app.clone(), "printer@example.com").await;

    let response = post_json_auth(
        app.clone(),
        "/api/mrp/saveprintdetails",
        json!({ "corporatecode": "CC-7", "brand": "Acme", "manufacturedate": "06/2024" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["message"],
        "Print details saved successfully"
    );

    let list = body_json(get(app, "/api/mrp/getprintedmrp").await).await;
    assert_eq!(list[0]["brand"], "Acme");
    assert_eq!(list[0]["useremail"], "printer@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_counts(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed_product(app.clone()).await;
    let token = common::signup_token(app.clone(), "desk@example.com").await;
    post_json_auth(
        app.clone(),
        "/api/dispatch/savedispatch",
        json!({ "corporateCode": "CC-7", "skuCode": "SKU-7", "mrp": 650 }),
        &token,
    )
    .await;

    let response = get(app, "/api/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["productCount"], 1);
    assert_eq!(json["dispatchCount"], 1);
    assert_eq!(json["productCountByDate"][0]["count"], 1);
    assert_eq!(json["dispatchCountByDate"][0]["count"], 1);
}
