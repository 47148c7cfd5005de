//! Chunk import: validate a batch of spreadsheet rows and persist it into one
//! target table.
//!
//! - [`dedup`] -- in-batch and in-store duplicate detection (pure).
//! - [`pipeline`] -- the four-step import run, generic over [`ImportStore`].

pub mod dedup;
pub mod pipeline;

use async_trait::async_trait;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::marketplace::ImportConfig;
use crate::types::Timestamp;

pub use pipeline::{ImportOutcome, ImportPipeline};

/// One uploaded row: spreadsheet header -> cell value.
pub type ImportRow = Map<String, Value>;

/// Why a row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowErrorKind {
    DuplicateInBatch,
    DuplicateInStore,
    BarcodeFailed,
}

impl RowErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowErrorKind::DuplicateInBatch => "Duplicate in chunk",
            RowErrorKind::DuplicateInStore => "Duplicate in database",
            RowErrorKind::BarcodeFailed => "Barcode generation failed",
        }
    }
}

/// A rejected row, reported back to the uploader.
///
/// Serializes as the submitted row with an `error` field added, so the client
/// can show the offending spreadsheet line next to the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub row: ImportRow,
    pub kind: RowErrorKind,
}

impl RowError {
    pub fn new(row: ImportRow, kind: RowErrorKind) -> Self {
        Self { row, kind }
    }
}

impl Serialize for RowError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.row.iter().filter(|(k, _)| k.as_str() != "error");
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("error", self.kind.as_str())?;
        map.end()
    }
}

/// A row that passed duplicate detection, with its uniqueness key extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedRow {
    pub key: String,
    pub row: ImportRow,
}

/// A row ready for the bulk insert.
#[derive(Debug, Clone)]
pub struct PreparedRow {
    pub key: String,
    pub row: ImportRow,
    /// `None` only for tables without a barcode column.
    pub barcode: Option<String>,
}

/// Store operations the import pipeline needs.
///
/// Implemented over PostgreSQL in `backoffice-db`; tests use an in-memory
/// fake.
#[async_trait]
pub trait ImportStore: Send + Sync {
    type Error: Send;

    /// Return which of `keys` already exist in the config's table.
    async fn existing_keys(
        &self,
        config: &ImportConfig,
        keys: &[String],
    ) -> Result<Vec<String>, Self::Error>;

    /// Insert all `rows`, stamping `created_at`/`updated_at` with
    /// `stamped_at`. Returns the number of rows written.
    async fn insert_rows(
        &self,
        config: &ImportConfig,
        rows: &[PreparedRow],
        stamped_at: Timestamp,
    ) -> Result<u64, Self::Error>;
}

/// Extract the uniqueness key from `row`.
///
/// Returns `None` for missing, null or blank keys. Numeric keys are accepted
/// in their JSON text form.
pub fn row_key(row: &ImportRow, key_field: &str) -> Option<String> {
    let key = match row.get(key_field)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if key.trim().is_empty() {
        None
    } else {
        Some(key)
    }
}
