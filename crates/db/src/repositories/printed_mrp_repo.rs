//! Repository for the `printedmrp` table.

use sqlx::PgPool;

use crate::models::printed_mrp::{CreatePrintedMrp, PrintedMrp};

const COLUMNS: &str = "id, corporatecode, brand, manufacturedate, createddate, useremail";

pub struct PrintedMrpRepo;

impl PrintedMrpRepo {
    pub async fn create(pool: &PgPool, input: &CreatePrintedMrp) -> Result<PrintedMrp, sqlx::Error> {
        let query = format!(
            "INSERT INTO printedmrp (corporatecode, brand, manufacturedate, createddate, useremail)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PrintedMrp>(&query)
            .bind(&input.corporatecode)
            .bind(&input.brand)
            .bind(&input.manufacturedate)
            .bind(input.createddate)
            .bind(&input.useremail)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<PrintedMrp>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM printedmrp ORDER BY id");
        sqlx::query_as::<_, PrintedMrp>(&query).fetch_all(pool).await
    }
}
