//! User data models.
//!
//! The [`User`] entity never carries the password column; services that need
//! to compare hashes use a private row struct instead, so the hash cannot
//! leak into a response body.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user account.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The closed set of roles a user can hold.
///
/// Stored as a Postgres enum and serialized as snake_case strings. Every
/// authorization decision matches exhaustively on this type.
#[derive(
    Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
