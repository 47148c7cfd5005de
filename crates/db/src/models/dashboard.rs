//! Dashboard aggregate rows.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Number of rows sharing one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct DateCount {
    pub count: i64,
    pub date: NaiveDate,
}
