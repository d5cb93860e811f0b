//! Request extractors whose rejections answer with the JSON error body.
//!
//! Axum's own `Path` and `Json` extractors reject malformed input with a plain-text
//! body. These wrappers convert the rejection into `AppError::BadRequest` so every
//! non-2xx response carries `{"message": ...}`.

use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    FromRequest, FromRequestParts,
};

use crate::server::error::AppError;

/// Path parameters, e.g. `Path(id): Path<i32>`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
