//! Route definitions for the `/products` resource.

use axum::routing::{get, put};
use axum::Router;
use backoffice_core::marketplace::PRODUCTS;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// POST   /upload-chunk             chunk import into the catalog
/// GET    /get-data                 list products
/// GET    /{corporate_code}         get one product
/// PUT    /update/{corporate_code}  update sku code / image url
/// DELETE /{corporate_code}         delete one product
/// ```
pub fn router() -> Router<AppState> {
    super::marketplace::upload_router(&PRODUCTS)
        .route("/get-data", get(product::list_products))
        .route(
            "/{corporate_code}",
            get(product::get_product).delete(product::delete_product),
        )
        .route("/update/{corporate_code}", put(product::update_product))
}
