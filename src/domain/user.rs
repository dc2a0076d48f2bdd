//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 5, max = 20, message = "username must be between 5 and 20 characters"))]
    #[schema(example = "jane_doe")]
    pub username: String,
    #[validate(length(min = 8, max = 16, message = "password must be between 8 and 16 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8, max_length = 16)]
    pub password: String,
    #[validate(length(min = 8, max = 16, message = "password_confirmation must be between 8 and 16 characters"))]
    #[schema(example = "SecurePass123!")]
    pub password_confirmation: String,
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 2, max = 100, message = "first_name must be between 2 and 100 characters"))]
    #[schema(example = "Jane")]
    pub first_name: String,
    #[validate(length(min = 2, max = 100, message = "last_name must be between 2 and 100 characters"))]
    #[schema(example = "Doe")]
    pub last_name: String,
}

/// Fields persisted for a new account, password already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Local-strategy credentials
///
/// Absent fields deserialize as empty strings, which login rejects.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct Credentials {
    #[serde(default)]
    #[schema(example = "jane_doe")]
    pub username: String,
    #[serde(default)]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

impl Credentials {
    /// Both fields present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Returned by registration and login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "jane_doe")]
    pub username: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Signed JWT to send as `Authorization: Bearer <token>`
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            token,
        }
    }
}
