//! Email and password authentication.
//!
//! Registration and login both answer with a freshly issued bearer token.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthenticatedUser, CreateUserParam, LoginParam, RegisterParam},
    service::auth::token::TokenService,
    util::{
        db::is_unique_violation,
        password::{hash_password, verify_password},
    },
};

pub mod token;

const MIN_PASSWORD_LEN: usize = 6;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new student account and signs it in.
    ///
    /// # Arguments
    /// - `param` - Normalized email, password and display name
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The new account with an access token
    /// - `Err(AppError::AuthErr(Validation))` - Malformed email, short password or empty name
    /// - `Err(AppError::AuthErr(EmailTaken))` - An account with that email exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterParam) -> Result<AuthenticatedUser, AppError> {
        validate_registration(&param)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_credentials_by_email(&param.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken(param.email).into());
        }

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                email: param.email.clone(),
                password_hash,
                name: param.name,
                role: UserRole::Student,
            })
            .await
            .map_err(|e| {
                // Lost a race with a concurrent registration of the same email
                if is_unique_violation(&e) {
                    AppError::from(AuthError::EmailTaken(param.email.clone()))
                } else {
                    AppError::from(e)
                }
            })?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        let token = self.tokens.issue(&user)?;

        Ok(AuthenticatedUser { token, user })
    }

    /// Signs in with email and password.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - The account with an access token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, param: LoginParam) -> Result<AuthenticatedUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &credentials.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&credentials.user)?;

        Ok(AuthenticatedUser {
            token,
            user: credentials.user,
        })
    }
}

fn validate_registration(param: &RegisterParam) -> Result<(), AuthError> {
    let valid_email = param
        .email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid_email {
        return Err(AuthError::Validation("Invalid email address".to_string()));
    }

    if param.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    if param.name.is_empty() {
        return Err(AuthError::Validation("Name is required".to_string()));
    }

    Ok(())
}
