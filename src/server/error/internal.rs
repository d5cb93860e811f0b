use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Signing a freshly issued access token failed.
    #[error("Failed to issue access token: {0}")]
    TokenIssue(#[source] jsonwebtoken::errors::Error),
}
