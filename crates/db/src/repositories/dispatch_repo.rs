//! Repository for the `dispatches` table.

use sqlx::PgPool;

use crate::models::dispatch::{CreateDispatch, Dispatch};

const COLUMNS: &str = "id, corporatecode, skucode, mrp, createddate, useremail";

/// Append-only access to dispatch events.
pub struct DispatchRepo;

impl DispatchRepo {
    pub async fn create(pool: &PgPool, input: &CreateDispatch) -> Result<Dispatch, sqlx::Error> {
        let query = format!(
            "INSERT INTO dispatches (corporatecode, skucode, mrp, createddate, useremail)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dispatch>(&query)
            .bind(&input.corporatecode)
            .bind(&input.skucode)
            .bind(&input.mrp)
            .bind(input.createddate)
            .bind(&input.useremail)
            .fetch_one(pool)
            .await
    }

    /// List every dispatch, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Dispatch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dispatches ORDER BY id");
        sqlx::query_as::<_, Dispatch>(&query).fetch_all(pool).await
    }
}
