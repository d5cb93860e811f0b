use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    /// One of `STUDENT`, `INSTRUCTOR`, `ADMIN`.
    pub role: String,
}
