//! Read and delete handlers for the marketplace label tables.
//!
//! Listing is per table. Lookup and delete by id fan out over all four
//! tables regardless of which mount received the request, since a label
//! operator searching by FSN or ASIN does not know which feed it came from.

use axum::extract::{Path, Query, State};
use axum::Json;
use backoffice_core::marketplace::ImportConfig;
use backoffice_db::repositories::MarketplaceRepo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET .../get-data-by-id`.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted_rows: u64,
}

/// All rows of one table.
pub async fn list_rows(
    state: &AppState,
    config: &'static ImportConfig,
) -> AppResult<Json<Vec<Value>>> {
    let rows = MarketplaceRepo::list(&state.pool, config).await?;
    Ok(Json(rows))
}

/// GET .../get-data-by-id?id=
pub async fn get_data_by_id(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> AppResult<Json<Vec<Value>>> {
    let id = required_id(query.id.as_deref())?;

    let rows = MarketplaceRepo::find_everywhere(&state.pool, id).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound("No data found for the provided ID".into()));
    }
    Ok(Json(rows))
}

/// DELETE .../{id}
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = required_id(Some(id.as_str()))?;

    let deleted_rows = MarketplaceRepo::delete_everywhere(&state.pool, id).await?;
    if deleted_rows == 0 {
        return Err(AppError::NotFound(
            "No data found to delete for the provided ID".into(),
        ));
    }
    tracing::info!(id, deleted_rows, "Deleted marketplace rows");

    Ok(Json(DeleteResponse {
        message: "Product deleted successfully",
        deleted_rows,
    }))
}

fn required_id(id: Option<&str>) -> AppResult<&str> {
    id.map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("ID query parameter is required".into()))
}
