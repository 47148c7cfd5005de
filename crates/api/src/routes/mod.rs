pub mod auth;
pub mod dispatch;
pub mod health;
pub mod marketplace;
pub mod product;

use axum::routing::get;
use axum::Router;
use backoffice_core::marketplace::Marketplace;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/signup, /auth/login, /auth/refresh         token issue (public)
///
/// /products/upload-chunk                           catalog chunk import
/// /products/get-data                               list
/// /products/{corporate_code}                       get, delete
/// /products/update/{corporate_code}                update
///
/// /mrp/...      Flipkart Zap labels  (+ /saveprintdetails, /getprintedmrp)
/// /gn/...       Flipkart GN labels
/// /appario/...  Appario labels
/// /coco/...     CocoBlu labels
///   each: /upload-chunk, /get-data, /get-data-by-id?id=, /{id}
///
/// /dispatch/savedispatch                           record (requires auth)
/// /dispatch/dispatches                             list
/// /dispatch/sku/{sku_code}                         product by SKU
/// /dispatch/{corporate_code}/{sku_code}            product by both codes
///
/// /dashboard                                       counters
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/products", product::router())
        .nest("/mrp", marketplace::mrp_router())
        .nest("/gn", marketplace::router(Marketplace::FlipkartGn))
        .nest("/appario", marketplace::router(Marketplace::Appario))
        .nest("/coco", marketplace::router(Marketplace::CocoBlu))
        .nest("/dispatch", dispatch::router())
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
}
