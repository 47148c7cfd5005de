//! JWT Bearer authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::StatusCode;
use backoffice_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::state::AppState;

/// The caller identified by the `Authorization: Bearer <token>` header.
///
/// Rejections carry no body: a missing or malformed header is `401`, a
/// token that fails verification (bad signature, expired) is `403`.
///
/// ```ignore
/// async fn save(user: AuthUser, AppJson(input): AppJson<Input>) -> AppResult<StatusCode> {
///     tracing::info!(user_id = user.user_id, email = %user.email, "saving");
///     Ok(StatusCode::CREATED)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            StatusCode::FORBIDDEN
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
