use backoffice_core::import::PreparedRow;
use backoffice_core::marketplace::PRODUCTS;
use backoffice_db::models::dispatch::CreateDispatch;
use backoffice_db::models::product::UpdateProduct;
use backoffice_db::models::session::CreateSession;
use backoffice_db::models::user::CreateUser;
use backoffice_db::repositories::{
    DashboardRepo, DispatchRepo, MarketplaceRepo, ProductRepo, SessionRepo, UserRepo,
};
use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;

async fn seed_product(pool: &PgPool, corporate_code: &str, sku: &str) {
    let row = json!({ "corporatecode": corporate_code, "skucode": sku, "mrp": "100" });
    let prepared = PreparedRow {
        key: corporate_code.to_string(),
        row: row.as_object().cloned().unwrap(),
        barcode: None,
    };
    MarketplaceRepo::insert_rows(pool, &PRODUCTS, &[prepared], Utc::now())
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn product_update_only_touches_sent_fields(pool: PgPool) {
    seed_product(&pool, "CC-1", "SKU-1").await;

    let updated = ProductRepo::update(
        &pool,
        "CC-1",
        &UpdateProduct {
            imageurl: Some("http://img".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.skucode.as_deref(), Some("SKU-1"));
    assert_eq!(updated.imageurl.as_deref(), Some("http://img"));

    let missing = ProductRepo::update(&pool, "NOPE", &UpdateProduct::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn product_lookups(pool: PgPool) {
    seed_product(&pool, "CC-1", "SKU-1").await;
    seed_product(&pool, "CC-2", "SKU-1").await;

    let both = ProductRepo::find_by_corporate_and_sku(&pool, "CC-2", "SKU-1")
        .await
        .unwrap();
    assert_eq!(both.unwrap().corporatecode, "CC-2");

    let by_sku = ProductRepo::find_by_sku(&pool, "SKU-1").await.unwrap();
    assert_eq!(by_sku.unwrap().corporatecode, "CC-1", "oldest row wins");

    assert!(ProductRepo::delete(&pool, "CC-1").await.unwrap());
    assert!(!ProductRepo::delete(&pool, "CC-1").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_groups_by_day(pool: PgPool) {
    seed_product(&pool, "CC-1", "SKU-1").await;
    let today = Utc::now();
    for createddate in [today, today, today - Duration::days(2)] {
        DispatchRepo::create(
            &pool,
            &CreateDispatch {
                corporatecode: "CC-1".into(),
                skucode: "SKU-1".into(),
                mrp: Some("100".into()),
                createddate,
                useremail: "desk@example.com".into(),
            },
        )
        .await
        .unwrap();
    }

    assert_eq!(DashboardRepo::product_count(&pool).await.unwrap(), 1);
    assert_eq!(DashboardRepo::dispatch_count(&pool).await.unwrap(), 3);

    let by_date = DashboardRepo::dispatches_by_date(&pool).await.unwrap();
    let counts: Vec<i64> = by_date.iter().map(|d| d.count).collect();
    assert_eq!(counts, vec![2, 1], "newest day first");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn revoked_session_is_not_found(pool: PgPool) {
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "ops@example.com".into(),
            password_hash: "$argon2id$stub".into(),
        },
    )
    .await
    .unwrap();

    let session = SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: "abc".into(),
            expires_at: Utc::now() + Duration::days(7),
        },
    )
    .await
    .unwrap();

    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "abc")
        .await
        .unwrap()
        .is_some());
    assert!(SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(!SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "abc")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_hits_unique_constraint(pool: PgPool) {
    let input = CreateUser {
        email: "ops@example.com".into(),
        password_hash: "$argon2id$stub".into(),
    };
    UserRepo::create(&pool, &input).await.unwrap();

    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(
        err.as_database_error().and_then(|e| e.constraint()),
        Some("uq_users_email")
    );
}
