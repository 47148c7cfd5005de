//! Handlers for the shared product catalog (`/products`).

use axum::extract::{Path, State};
use axum::Json;
use backoffice_db::models::product::{Product, UpdateProduct};
use backoffice_db::repositories::ProductRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /api/products/get-data
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /api/products/{corporate_code}
pub async fn get_product(
    State(state): State<AppState>,
    Path(corporate_code): Path<String>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_corporate_code(&state.pool, &corporate_code)
        .await?
        .ok_or_else(product_not_found)?;
    Ok(Json(product))
}

/// PUT /api/products/update/{corporate_code}
///
/// Only `skucode` and `imageurl` are editable; absent fields keep their value.
pub async fn update_product(
    State(state): State<AppState>,
    Path(corporate_code): Path<String>,
    AppJson(input): AppJson<UpdateProduct>,
) -> AppResult<Json<MessageResponse>> {
    ProductRepo::update(&state.pool, &corporate_code, &input)
        .await?
        .ok_or_else(product_not_found)?;
    tracing::info!(corporate_code = %corporate_code, "Product updated");

    Ok(Json(MessageResponse {
        message: "Product updated successfully",
    }))
}

/// DELETE /api/products/{corporate_code}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(corporate_code): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if !ProductRepo::delete(&state.pool, &corporate_code).await? {
        return Err(product_not_found());
    }
    tracing::info!(corporate_code = %corporate_code, "Product deleted");

    Ok(Json(MessageResponse {
        message: "Product deleted successfully",
    }))
}

fn product_not_found() -> AppError {
    AppError::NotFound("Product not found".into())
}
