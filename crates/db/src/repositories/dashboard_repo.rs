//! Aggregate counts for the back-office dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DateCount;

pub struct DashboardRepo;

impl DashboardRepo {
    pub async fn product_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await
    }

    pub async fn dispatch_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM dispatches")
            .fetch_one(pool)
            .await
    }

    /// Products grouped by the date they were last updated, newest first.
    pub async fn products_by_date(pool: &PgPool) -> Result<Vec<DateCount>, sqlx::Error> {
        sqlx::query_as::<_, DateCount>(
            "SELECT COUNT(*) AS count, DATE(updated_at) AS date
             FROM products
             GROUP BY DATE(updated_at)
             ORDER BY DATE(updated_at) DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Dispatches grouped by dispatch date, newest first.
    pub async fn dispatches_by_date(pool: &PgPool) -> Result<Vec<DateCount>, sqlx::Error> {
        sqlx::query_as::<_, DateCount>(
            "SELECT COUNT(*) AS count, DATE(createddate) AS date
             FROM dispatches
             GROUP BY DATE(createddate)
             ORDER BY DATE(createddate) DESC",
        )
        .fetch_all(pool)
        .await
    }
}
