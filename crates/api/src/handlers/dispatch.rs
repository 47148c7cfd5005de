//! Handlers for outbound dispatch entries (`/dispatch`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use backoffice_core::types::Timestamp;
use backoffice_db::models::dispatch::{CreateDispatch, Dispatch};
use backoffice_db::models::product::Product;
use backoffice_db::repositories::{DispatchRepo, ProductRepo};
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::product::MessageResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /api/dispatch/savedispatch`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDispatchRequest {
    pub corporate_code: String,
    pub sku_code: String,
    /// Scanned MRP; spreadsheets send it as either a number or text.
    #[serde(default)]
    pub mrp: Option<Value>,
    pub created_date: Option<Timestamp>,
}

/// POST /api/dispatch/savedispatch
///
/// Records a dispatch for an existing catalog product, attributed to the
/// caller. Falls back to the catalog MRP when the scan carried none.
pub async fn save_dispatch(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<SaveDispatchRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let product =
        ProductRepo::find_by_corporate_and_sku(&state.pool, &input.corporate_code, &input.sku_code)
            .await?
            .ok_or_else(|| AppError::BadRequest("Product not found".into()))?;

    let dispatch = DispatchRepo::create(
        &state.pool,
        &CreateDispatch {
            corporatecode: product.corporatecode,
            skucode: input.sku_code,
            mrp: input.mrp.as_ref().and_then(mrp_text).or(product.mrp),
            createddate: input.created_date.unwrap_or_else(Utc::now),
            useremail: user.email,
        },
    )
    .await?;
    tracing::info!(dispatch_id = dispatch.id, user_id = user.user_id, "Dispatch created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Dispatch created successfully",
        }),
    ))
}

/// GET /api/dispatch/{corporate_code}/{sku_code}
pub async fn get_by_corporate_and_sku(
    State(state): State<AppState>,
    Path((corporate_code, sku_code)): Path<(String, String)>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_corporate_and_sku(&state.pool, &corporate_code, &sku_code)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("SKU code does not exist for the given corporate code".into())
        })?;
    Ok(Json(product))
}

/// GET /api/dispatch/sku/{sku_code}
pub async fn get_by_sku(
    State(state): State<AppState>,
    Path(sku_code): Path<String>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_sku(&state.pool, &sku_code)
        .await?
        .ok_or_else(|| AppError::NotFound("SKU code not found".into()))?;
    Ok(Json(product))
}

/// GET /api/dispatch/dispatches
pub async fn list_dispatches(State(state): State<AppState>) -> AppResult<Json<Vec<Dispatch>>> {
    let dispatches = DispatchRepo::list(&state.pool).await?;
    Ok(Json(dispatches))
}

fn mrp_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
