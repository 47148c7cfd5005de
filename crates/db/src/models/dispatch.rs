//! Dispatch event model and DTOs.

use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `dispatches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dispatch {
    pub id: DbId,
    pub corporatecode: String,
    pub skucode: String,
    pub mrp: Option<String>,
    pub createddate: Timestamp,
    pub useremail: String,
}

/// DTO for recording a dispatch.
#[derive(Debug)]
pub struct CreateDispatch {
    pub corporatecode: String,
    pub skucode: String,
    pub mrp: Option<String>,
    pub createddate: Timestamp,
    pub useremail: String,
}
