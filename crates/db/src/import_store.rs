//! PostgreSQL implementation of the import pipeline's store seam.

use async_trait::async_trait;
use backoffice_core::import::{ImportStore, PreparedRow};
use backoffice_core::marketplace::ImportConfig;
use backoffice_core::types::Timestamp;

use crate::repositories::MarketplaceRepo;
use crate::DbPool;

/// Runs import lookups and bulk inserts against the shared pool.
#[derive(Clone)]
pub struct PgImportStore {
    pool: DbPool,
}

impl PgImportStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImportStore for PgImportStore {
    type Error = sqlx::Error;

    async fn existing_keys(
        &self,
        config: &ImportConfig,
        keys: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        MarketplaceRepo::existing_keys(&self.pool, config, keys).await
    }

    async fn insert_rows(
        &self,
        config: &ImportConfig,
        rows: &[PreparedRow],
        stamped_at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        MarketplaceRepo::insert_rows(&self.pool, config, rows, stamped_at).await
    }
}
