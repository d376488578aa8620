//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON request body whose rejections use the API error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
