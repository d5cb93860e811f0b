use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

/// Resolves the caller of a request from its `Authorization: Bearer <token>` header.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires an authenticated caller.
    ///
    /// # Returns
    /// - `Ok(User)` - The user the token was issued to
    /// - `Err(AppError::AuthErr(MissingToken))` - No bearer token on the request
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token malformed, tampered with or expired
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - The token's user was deleted
    /// - `Err(AppError::DbErr)` - Database error during user lookup
    pub async fn require(&self) -> Result<User, AppError> {
        let token = bearer_token(self.headers)?;
        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        Ok(user)
    }
}

/// Extracts the token from a `Bearer` authorization header.
///
/// The scheme is matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("authorization header is not ASCII".to_string()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AuthError::InvalidToken(
            "authorization header is not a bearer token".to_string(),
        )),
    }
}
