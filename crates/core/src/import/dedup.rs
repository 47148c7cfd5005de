//! Duplicate detection for chunk uploads.
//!
//! Both passes are linear: the batch pass keeps a seen-set of keys, and the
//! store pass checks membership in the key set returned by one `ANY($1)`
//! query.

use std::collections::HashSet;

use super::{row_key, ImportRow, KeyedRow, RowError, RowErrorKind};

/// Result of scanning a batch for repeated keys.
#[derive(Debug, Default)]
pub struct BatchScan {
    /// First occurrence of every non-blank key, in upload order.
    pub valid: Vec<KeyedRow>,
    /// Every later occurrence of an already-seen key.
    pub duplicates: Vec<RowError>,
    /// Rows dropped because their key was missing or blank.
    pub keyless: usize,
}

/// Single pass over `rows`: the first row with a given key wins and every
/// repeat is flagged individually as [`RowErrorKind::DuplicateInBatch`].
pub fn scan_batch(rows: Vec<ImportRow>, key_field: &str) -> BatchScan {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut scan = BatchScan::default();

    for row in rows {
        let Some(key) = row_key(&row, key_field) else {
            scan.keyless += 1;
            continue;
        };
        if seen.insert(key.clone()) {
            scan.valid.push(KeyedRow { key, row });
        } else {
            scan.duplicates
                .push(RowError::new(row, RowErrorKind::DuplicateInBatch));
        }
    }

    scan
}

/// Split `valid` into rows whose key is absent from `existing` and rows
/// already present in the store.
pub fn split_store_duplicates(
    valid: Vec<KeyedRow>,
    existing: &HashSet<String>,
) -> (Vec<KeyedRow>, Vec<RowError>) {
    let mut fresh = Vec::with_capacity(valid.len());
    let mut duplicates = Vec::new();

    for keyed in valid {
        if existing.contains(&keyed.key) {
            duplicates.push(RowError::new(keyed.row, RowErrorKind::DuplicateInStore));
        } else {
            fresh.push(keyed);
        }
    }

    (fresh, duplicates)
}
