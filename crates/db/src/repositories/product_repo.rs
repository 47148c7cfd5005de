//! Repository for the `products` table.
//!
//! Bulk inserts go through the import pipeline
//! ([`crate::PgImportStore`]); this repository covers reads and the
//! single-row update/delete endpoints.

use sqlx::PgPool;

use crate::models::product::{Product, UpdateProduct};

const COLUMNS: &str = "id, corporatecode, skucode, imageurl, mrp, created_at, updated_at";

pub struct ProductRepo;

impl ProductRepo {
    /// List every product, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    pub async fn find_by_corporate_code(
        pool: &PgPool,
        corporate_code: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE corporatecode = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(corporate_code)
            .fetch_optional(pool)
            .await
    }

    /// Find the product matching both a corporate code and a SKU code.
    pub async fn find_by_corporate_and_sku(
        pool: &PgPool,
        corporate_code: &str,
        sku_code: &str,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products WHERE corporatecode = $1 AND skucode = $2");
        sqlx::query_as::<_, Product>(&query)
            .bind(corporate_code)
            .bind(sku_code)
            .fetch_optional(pool)
            .await
    }

    /// First product carrying `sku_code`. SKU codes are not unique, so the
    /// oldest row wins.
    pub async fn find_by_sku(pool: &PgPool, sku_code: &str) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE skucode = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Product>(&query)
            .bind(sku_code)
            .fetch_optional(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given corporate code exists.
    pub async fn update(
        pool: &PgPool,
        corporate_code: &str,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                skucode = COALESCE($2, skucode),
                imageurl = COALESCE($3, imageurl),
                updated_at = NOW()
             WHERE corporatecode = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(corporate_code)
            .bind(&input.skucode)
            .bind(&input.imageurl)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, corporate_code: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE corporatecode = $1")
            .bind(corporate_code)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
