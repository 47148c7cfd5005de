//! Request extractors whose rejections render through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with a `{"error", "code"}` rejection body.
///
/// A body that is not valid JSON, or does not fit the target type, is a
/// `400 BAD_REQUEST` instead of axum's plain-text `4xx`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
