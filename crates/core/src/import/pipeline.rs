//! The chunk import run.
//!
//! 1. In-batch dedup. Any repeat aborts before the store is touched.
//! 2. Store dedup with one membership query. Any hit aborts.
//! 3. Barcode augmentation: provided payloads pass through, the rest are
//!    synthesized concurrently from the row key. Any failure aborts.
//! 4. One bulk insert, stamped with the time the run started.
//!
//! Nothing is written unless every step succeeds for every surviving row.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::dedup::{scan_batch, split_store_duplicates};
use super::{ImportRow, ImportStore, KeyedRow, PreparedRow, RowError, RowErrorKind};
use crate::barcode::{BarcodeEncoder, BarcodeError};
use crate::marketplace::{ImportConfig, BARCODE_FIELD};

/// How an import run ended.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Every surviving row was written.
    Imported { inserted: u64 },
    /// At least one row was invalid; nothing was written.
    Rejected {
        errors: Vec<RowError>,
        valid_data: Vec<ImportRow>,
    },
    /// The batch was empty.
    NoData,
    /// Rows were received but none carried a usable key.
    NothingToInsert,
}

/// Runs chunk imports for one target table.
pub struct ImportPipeline<'a, S> {
    config: &'static ImportConfig,
    store: &'a S,
    encoder: Arc<dyn BarcodeEncoder>,
}

impl<'a, S: ImportStore> ImportPipeline<'a, S> {
    pub fn new(config: &'static ImportConfig, store: &'a S, encoder: Arc<dyn BarcodeEncoder>) -> Self {
        Self {
            config,
            store,
            encoder,
        }
    }

    /// Validate and persist `batch`. Store failures propagate unchanged;
    /// validation failures are reported through [`ImportOutcome::Rejected`].
    pub async fn run(&self, batch: Vec<ImportRow>) -> Result<ImportOutcome, S::Error> {
        let stamped_at = Utc::now();

        if batch.is_empty() {
            return Ok(ImportOutcome::NoData);
        }
        let received = batch.len();

        let scan = scan_batch(batch, self.config.key_field);
        if !scan.duplicates.is_empty() {
            tracing::info!(
                route = self.config.name,
                table = self.config.table,
                received,
                duplicates = scan.duplicates.len(),
                "Chunk rejected: duplicate keys within batch",
            );
            return Ok(ImportOutcome::Rejected {
                errors: scan.duplicates,
                valid_data: into_rows(scan.valid),
            });
        }
        if scan.valid.is_empty() {
            return Ok(ImportOutcome::NothingToInsert);
        }

        let keys: Vec<String> = scan.valid.iter().map(|r| r.key.clone()).collect();
        let existing: HashSet<String> = self
            .store
            .existing_keys(self.config, &keys)
            .await?
            .into_iter()
            .collect();

        let (fresh, mut errors) = split_store_duplicates(scan.valid, &existing);
        if !errors.is_empty() {
            errors.extend(scan.duplicates);
            tracing::info!(
                route = self.config.name,
                table = self.config.table,
                received,
                duplicates = errors.len(),
                "Chunk rejected: keys already stored",
            );
            return Ok(ImportOutcome::Rejected {
                errors,
                valid_data: into_rows(fresh),
            });
        }

        let (prepared, barcode_errors) = self.attach_barcodes(fresh).await;
        if !barcode_errors.is_empty() {
            tracing::warn!(
                route = self.config.name,
                table = self.config.table,
                failed = barcode_errors.len(),
                "Chunk rejected: barcode generation failed",
            );
            return Ok(ImportOutcome::Rejected {
                errors: barcode_errors,
                valid_data: prepared.into_iter().map(|p| p.row).collect(),
            });
        }
        if prepared.is_empty() {
            return Ok(ImportOutcome::NothingToInsert);
        }

        let inserted = self
            .store
            .insert_rows(self.config, &prepared, stamped_at)
            .await?;
        tracing::info!(
            route = self.config.name,
            table = self.config.table,
            received,
            inserted,
            skipped_keyless = scan.keyless,
            "Chunk imported",
        );

        Ok(ImportOutcome::Imported { inserted })
    }

    /// Resolve a barcode for every row. Rows are encoded concurrently on the
    /// blocking pool since rendering is CPU-bound.
    async fn attach_barcodes(&self, rows: Vec<KeyedRow>) -> (Vec<PreparedRow>, Vec<RowError>) {
        if self.config.barcode_column.is_none() {
            let prepared = rows
                .into_iter()
                .map(|KeyedRow { key, row }| PreparedRow {
                    key,
                    row,
                    barcode: None,
                })
                .collect();
            return (prepared, Vec::new());
        }

        let tasks = rows.into_iter().map(|keyed| {
            let encoder = Arc::clone(&self.encoder);
            async move {
                if let Some(provided) = provided_barcode(&keyed.row) {
                    return (keyed, Ok(provided));
                }
                let code = keyed.key.clone();
                let result = tokio::task::spawn_blocking(move || encoder.encode(&code))
                    .await
                    .unwrap_or_else(|e| {
                        Err(BarcodeError::Render(format!("encoder task failed: {e}")))
                    });
                (keyed, result)
            }
        });

        let mut prepared = Vec::new();
        let mut errors = Vec::new();
        for (KeyedRow { key, row }, result) in futures::future::join_all(tasks).await {
            match result {
                Ok(barcode) => prepared.push(PreparedRow {
                    key,
                    row,
                    barcode: Some(barcode),
                }),
                Err(e) => {
                    tracing::warn!(
                        route = self.config.name,
                        table = self.config.table,
                        key = %key,
                        error = %e,
                        "Barcode generation failed",
                    );
                    errors.push(RowError::new(row, RowErrorKind::BarcodeFailed));
                }
            }
        }
        (prepared, errors)
    }
}

/// A non-empty `BARCODE` cell, taken verbatim.
fn provided_barcode(row: &ImportRow) -> Option<String> {
    match row.get(BARCODE_FIELD)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn into_rows(keyed: Vec<KeyedRow>) -> Vec<ImportRow> {
    keyed.into_iter().map(|k| k.row).collect()
}
