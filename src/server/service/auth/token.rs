//! Bearer token issuing and validation.
//!
//! Tokens are HS256-signed JWTs. Clients treat them as opaque strings and send them
//! back in the `Authorization: Bearer <token>` header.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::User,
};

/// Claims carried by every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was issued to
    pub sub: i32,
    pub email: String,
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and validates access tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    expiry: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used for both signing and validation
    /// - `expiry_hours` - Lifetime of issued tokens
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            expiry: Duration::hours(expiry_hours),
        }
    }

    /// Issues a signed token for the user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::InternalErr(TokenIssue))` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role_name(),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(InternalError::TokenIssue)?;

        Ok(token)
    }

    /// Validates signature and expiry of a token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and not expired
    /// - `Err(AuthError::InvalidToken)` - Token is malformed, tampered with, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
