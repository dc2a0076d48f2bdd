//! Domain layer - Core business entities and logic
//!
//! Entities, request types and the password value object. The venue and
//! job-position enums carry their storage mapping so that entity models
//! can use them directly.

pub mod business;
pub mod password;
pub mod staff;
pub mod user;

pub use business::{Business, BusinessType, CreateBusiness, UpdateBusiness};
pub use password::Password;
pub use staff::{CreateStaff, JobPosition, Staff, UpdateStaff};
pub use user::{AuthResponse, CreateUser, Credentials, NewUser, User};

use serde::{Deserialize, Deserializer};

/// Tells an explicit `null` apart from an absent field in partial updates.
///
/// Pair with `#[serde(default)]`: absent is `None`, `null` is `Some(None)`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
