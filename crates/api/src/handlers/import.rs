//! Chunk upload handler shared by every import target.
//!
//! The route layer binds one [`ImportConfig`] per mount; this module only
//! runs the pipeline and shapes its outcome into the HTTP contract.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use backoffice_core::import::{ImportOutcome, ImportPipeline, ImportRow, RowError};
use backoffice_core::marketplace::ImportConfig;
use backoffice_db::PgImportStore;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST .../upload-chunk`.
#[derive(Debug, Deserialize)]
pub struct UploadChunkRequest {
    /// Spreadsheet rows keyed by header text. A missing `data` field is
    /// treated like an empty chunk.
    #[serde(default)]
    pub data: Vec<ImportRow>,
}

#[derive(Debug, Serialize)]
pub struct UploadAccepted {
    pub message: &'static str,
    pub inserted: u64,
}

/// Body of a rejected chunk: every offending row with its reason, plus the
/// rows that would have been accepted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRejected {
    pub errors: Vec<RowError>,
    pub valid_data: Vec<ImportRow>,
}

/// Validate and insert one chunk into `config.table`.
pub async fn upload_chunk(
    state: &AppState,
    config: &'static ImportConfig,
    input: UploadChunkRequest,
) -> AppResult<Response> {
    let store = PgImportStore::new(state.pool.clone());
    let pipeline = ImportPipeline::new(config, &store, Arc::clone(&state.barcode));

    match pipeline.run(input.data).await? {
        ImportOutcome::Imported { inserted } => Ok(Json(UploadAccepted {
            message: "Data uploaded successfully",
            inserted,
        })
        .into_response()),
        ImportOutcome::Rejected { errors, valid_data } => Ok((
            StatusCode::BAD_REQUEST,
            Json(UploadRejected { errors, valid_data }),
        )
            .into_response()),
        ImportOutcome::NoData => Err(AppError::BadRequest("No data provided".into())),
        ImportOutcome::NothingToInsert => {
            Err(AppError::BadRequest("No valid data to insert".into()))
        }
    }
}
