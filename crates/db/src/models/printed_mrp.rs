//! Printed MRP label log.

use backoffice_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `printedmrp` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PrintedMrp {
    pub id: DbId,
    pub corporatecode: String,
    pub brand: Option<String>,
    pub manufacturedate: Option<String>,
    pub createddate: Timestamp,
    pub useremail: String,
}

/// DTO for recording a printed label.
#[derive(Debug)]
pub struct CreatePrintedMrp {
    pub corporatecode: String,
    pub brand: Option<String>,
    pub manufacturedate: Option<String>,
    pub createddate: Timestamp,
    pub useremail: String,
}
