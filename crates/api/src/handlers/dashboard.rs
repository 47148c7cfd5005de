//! Handler for the landing-page dashboard counters.

use axum::extract::State;
use axum::Json;
use backoffice_db::models::dashboard::DateCount;
use backoffice_db::repositories::DashboardRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub product_count: i64,
    pub dispatch_count: i64,
    /// Products last touched per calendar day, newest first.
    pub product_count_by_date: Vec<DateCount>,
    /// Dispatches recorded per calendar day, newest first.
    pub dispatch_count_by_date: Vec<DateCount>,
}

/// GET /api/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardData>> {
    let pool = &state.pool;

    let product_count = DashboardRepo::product_count(pool).await?;
    let dispatch_count = DashboardRepo::dispatch_count(pool).await?;
    let product_count_by_date = DashboardRepo::products_by_date(pool).await?;
    let dispatch_count_by_date = DashboardRepo::dispatches_by_date(pool).await?;

    Ok(Json(DashboardData {
        product_count,
        dispatch_count,
        product_count_by_date,
        dispatch_count_by_date,
    }))
}
