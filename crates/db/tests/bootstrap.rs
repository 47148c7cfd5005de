use sqlx::PgPool;

/// Connect, migrate, and confirm every table the service touches exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    backoffice_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "user_sessions",
        "products",
        "dispatches",
        "printedmrp",
        "mrpflipkartzap",
        "mrpflipkartgn",
        "appario",
        "cocoblu",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}
