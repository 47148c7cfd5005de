//! Product catalog model and DTOs.

use backoffice_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table, keyed by corporate code.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub corporatecode: String,
    pub skucode: Option<String>,
    pub imageurl: Option<String>,
    pub mrp: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a product. `None` fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProduct {
    pub skucode: Option<String>,
    pub imageurl: Option<String>,
}
