//! Handlers for the printed-label log (`/mrp/saveprintdetails`,
//! `/mrp/getprintedmrp`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use backoffice_core::types::Timestamp;
use backoffice_db::models::printed_mrp::{CreatePrintedMrp, PrintedMrp};
use backoffice_db::repositories::PrintedMrpRepo;
use chrono::Utc;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::product::MessageResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PrintDetailsRequest {
    pub corporatecode: String,
    pub brand: Option<String>,
    pub manufacturedate: Option<String>,
    #[serde(rename = "createdDate")]
    pub created_date: Option<Timestamp>,
}

/// POST /api/mrp/saveprintdetails
pub async fn save_print_details(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<PrintDetailsRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    if input.corporatecode.trim().is_empty() {
        return Err(AppError::BadRequest("corporatecode is required".into()));
    }

    let entry = PrintedMrpRepo::create(
        &state.pool,
        &CreatePrintedMrp {
            corporatecode: input.corporatecode,
            brand: input.brand,
            manufacturedate: input.manufacturedate,
            createddate: input.created_date.unwrap_or_else(Utc::now),
            useremail: user.email,
        },
    )
    .await?;
    tracing::info!(print_id = entry.id, user_id = user.user_id, "Print details saved");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Print details saved successfully",
        }),
    ))
}

/// GET /api/mrp/getprintedmrp
pub async fn list_printed(State(state): State<AppState>) -> AppResult<Json<Vec<PrintedMrp>>> {
    let entries = PrintedMrpRepo::list(&state.pool).await?;
    Ok(Json(entries))
}
