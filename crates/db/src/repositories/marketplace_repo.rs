//! Repository for the config-driven import tables (marketplace label feeds
//! and the product catalog's bulk path).
//!
//! Table and column identifiers come from the compiled-in
//! [`ImportConfig`] records; every value is bound as a parameter.

use backoffice_core::import::PreparedRow;
use backoffice_core::marketplace::{column_value, ImportConfig, Marketplace};
use backoffice_core::types::Timestamp;
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder};

/// PostgreSQL accepts at most this many bind parameters per statement.
const MAX_BIND_PARAMS: usize = u16::MAX as usize;

pub struct MarketplaceRepo;

impl MarketplaceRepo {
    /// Which of `keys` are already stored, in one `ANY($1)` round trip.
    pub async fn existing_keys(
        pool: &PgPool,
        config: &ImportConfig,
        keys: &[String],
    ) -> Result<Vec<String>, sqlx::Error> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {key} FROM {table} WHERE {key} = ANY($1)",
            key = config.key_column,
            table = config.table,
        );
        sqlx::query_scalar::<_, String>(&query)
            .bind(keys)
            .fetch_all(pool)
            .await
    }

    /// Bulk insert `rows` inside one transaction.
    ///
    /// Rows go out as a single multi-row `INSERT` unless the batch would
    /// exceed the bind-parameter limit, in which case it is split into the
    /// fewest statements that fit. Returns the number of rows written.
    pub async fn insert_rows(
        pool: &PgPool,
        config: &ImportConfig,
        rows: &[PreparedRow],
        stamped_at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        if rows.is_empty() {
            return Ok(0);
        }

        let columns = config.insert_columns().join(", ");
        let rows_per_statement = (MAX_BIND_PARAMS / config.binds_per_row()).max(1);

        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for chunk in rows.chunks(rows_per_statement) {
            let mut qb: QueryBuilder<'_, Postgres> =
                QueryBuilder::new(format!("INSERT INTO {} ({columns}) ", config.table));
            qb.push_values(chunk, |mut b, prepared| {
                for mapping in config.columns {
                    b.push_bind(column_value(&prepared.row, mapping));
                }
                if config.barcode_column.is_some() {
                    b.push_bind(prepared.barcode.clone());
                }
                b.push_bind(stamped_at).push_bind(stamped_at);
            });
            inserted += qb.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Every row of the table as a JSON object, oldest first.
    pub async fn list(pool: &PgPool, config: &ImportConfig) -> Result<Vec<Value>, sqlx::Error> {
        let query = format!("SELECT to_jsonb(t) FROM {} t ORDER BY t.id", config.table);
        sqlx::query_scalar::<_, Value>(&query).fetch_all(pool).await
    }

    /// Rows whose key column equals `id`.
    pub async fn find_by_key(
        pool: &PgPool,
        config: &ImportConfig,
        id: &str,
    ) -> Result<Vec<Value>, sqlx::Error> {
        let query = format!(
            "SELECT to_jsonb(t) FROM {} t WHERE t.{} = $1 ORDER BY t.id",
            config.table, config.key_column,
        );
        sqlx::query_scalar::<_, Value>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }

    /// Delete rows whose key column equals `id`. Returns rows removed.
    pub async fn delete_by_key(
        pool: &PgPool,
        config: &ImportConfig,
        id: &str,
    ) -> Result<u64, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE {} = $1",
            config.table, config.key_column
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Look `id` up in every marketplace table, concatenating the matches in
    /// [`Marketplace::ALL`] order.
    pub async fn find_everywhere(pool: &PgPool, id: &str) -> Result<Vec<Value>, sqlx::Error> {
        let mut found = Vec::new();
        for marketplace in Marketplace::ALL {
            found.extend(Self::find_by_key(pool, marketplace.config(), id).await?);
        }
        Ok(found)
    }

    /// Delete `id` from every marketplace table. Returns total rows removed.
    pub async fn delete_everywhere(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let mut deleted = 0;
        for marketplace in Marketplace::ALL {
            let rows = Self::delete_by_key(pool, marketplace.config(), id).await?;
            if rows > 0 {
                tracing::debug!(table = marketplace.config().table, rows, id, "Deleted rows");
            }
            deleted += rows;
        }
        Ok(deleted)
    }
}
