//! Route definitions shared by the four marketplace label mounts.

use axum::extract::State;
use axum::routing::{delete, get, post};
use axum::Router;
use backoffice_core::marketplace::{ImportConfig, Marketplace};

use crate::extract::AppJson;
use crate::handlers::import::{self, UploadChunkRequest};
use crate::handlers::{marketplace, printed_mrp};
use crate::state::AppState;

/// Routes mounted at `/mrp`, `/gn`, `/appario` or `/coco`.
///
/// ```text
/// POST   /upload-chunk         chunk import into this marketplace's table
/// GET    /get-data             every row of this marketplace's table
/// GET    /get-data-by-id?id=   lookup across all four tables
/// DELETE /{id}                 delete across all four tables
/// ```
pub fn router(marketplace: Marketplace) -> Router<AppState> {
    let config = marketplace.config();
    upload_router(config)
        .route(
            "/get-data",
            get(move |State(state): State<AppState>| async move {
                marketplace::list_rows(&state, config).await
            }),
        )
        .route("/get-data-by-id", get(marketplace::get_data_by_id))
        .route("/{id}", delete(marketplace::delete_by_id))
}

/// The Flipkart Zap mount, which also carries the printed-label log.
///
/// ```text
/// POST /saveprintdetails   record a label print (requires auth)
/// GET  /getprintedmrp      list label prints
/// ```
pub fn mrp_router() -> Router<AppState> {
    router(Marketplace::FlipkartZap)
        .route("/saveprintdetails", post(printed_mrp::save_print_details))
        .route("/getprintedmrp", get(printed_mrp::list_printed))
}

/// `POST /upload-chunk` bound to one import target.
pub fn upload_router(config: &'static ImportConfig) -> Router<AppState> {
    Router::new().route(
        "/upload-chunk",
        post(
            move |State(state): State<AppState>,
                  AppJson(input): AppJson<UploadChunkRequest>| async move {
                import::upload_chunk(&state, config, input).await
            },
        ),
    )
}
