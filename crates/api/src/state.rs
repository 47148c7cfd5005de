use std::sync::Arc;

use backoffice_core::barcode::BarcodeEncoder;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Created at start-up, closed after shutdown.
    pub pool: backoffice_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Encoder used to synthesize missing barcodes during chunk uploads.
    pub barcode: Arc<dyn BarcodeEncoder>,
}
