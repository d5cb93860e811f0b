use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a guarded route.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(String),

    /// The token is valid but its subject no longer exists.
    #[error("User {0} referenced by token not found in database")]
    UserNotInDatabase(i32),

    /// Unknown email or wrong password on login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("Email {0} is already registered")]
    EmailTaken(String),

    /// Registration payload failed validation.
    #[error("{0}")]
    Validation(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token failures are logged at debug level while the client only sees a generic
/// "Unauthorized" to avoid leaking why a token was rejected.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 401 Unauthorized - For token failures, unknown users and bad credentials
/// - 409 Conflict - For `EmailTaken`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::EmailTaken(_) => error_response(
                StatusCode::CONFLICT,
                "Email already registered".to_string(),
            ),
            Self::Validation(msg) => error_response(StatusCode::BAD_REQUEST, msg),
        }
    }
}
