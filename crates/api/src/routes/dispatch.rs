//! Route definitions for the `/dispatch` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dispatch;
use crate::state::AppState;

/// Routes mounted at `/dispatch`.
///
/// ```text
/// POST /savedispatch                    record a dispatch (requires auth)
/// GET  /dispatches                      list dispatches
/// GET  /sku/{sku_code}                  product by SKU
/// GET  /{corporate_code}/{sku_code}     product by corporate code + SKU
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/savedispatch", post(dispatch::save_dispatch))
        .route("/dispatches", get(dispatch::list_dispatches))
        .route("/sku/{sku_code}", get(dispatch::get_by_sku))
        .route(
            "/{corporate_code}/{sku_code}",
            get(dispatch::get_by_corporate_and_sku),
        )
}
