//! User domain models and parameters.
//!
//! Provides the user account model shared by authentication, enrollment and group
//! membership, plus the parameter types used during registration and login.

use chrono::{DateTime, Utc};
use entity::user::UserRole;
use sea_orm::ActiveEnum;

use crate::model::{
    auth::{AuthResponseDto, LoginDto, RegisterDto},
    group::MemberUserDto,
    user::UserDto,
};

/// Registered user account without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lower-cased login email, unique across accounts.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    pub avatar: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Returns the stored string form of the user's role (e.g. `STUDENT`).
    pub fn role_name(&self) -> String {
        self.role.to_value()
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - Profile without credentials
    pub fn into_dto(self) -> UserDto {
        UserDto {
            role: self.role_name(),
            id: self.id,
            email: self.email,
            name: self.name,
            avatar: self.avatar,
        }
    }

    /// Converts the user into the public summary shown in group member lists.
    pub fn into_member_dto(self) -> MemberUserDto {
        MemberUserDto {
            id: self.id,
            name: self.name,
            avatar: self.avatar,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped; use `UserCredentials` where it is needed.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            avatar: entity.avatar,
            role: entity.role,
            created_at: entity.created_at,
        }
    }
}

/// A user together with their stored password hash.
///
/// Only returned by lookups performed for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// A user together with a freshly issued access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: User,
}

impl AuthenticatedUser {
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            token: self.token,
            user: self.user.into_dto(),
        }
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    /// Already hashed password.
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
}

/// Parameters for registering a new account.
///
/// The email is trimmed and lower-cased on conversion so lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl From<RegisterDto> for RegisterParam {
    fn from(dto: RegisterDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
            name: dto.name.trim().to_string(),
        }
    }
}

/// Parameters for logging in with email and password.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl From<LoginDto> for LoginParam {
    fn from(dto: LoginDto) -> Self {
        Self {
            email: normalize_email(&dto.email),
            password: dto.password,
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
