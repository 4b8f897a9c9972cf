//! Request extractors
//!
//! `AppJson` wraps `axum::Json` so that body-shape rejections (invalid JSON,
//! missing fields, wrong types) come back as this API's standard 400
//! `{"error": ...}` body instead of axum's default plain-text response.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor with API-shaped rejections
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
