//! Staff domain entity and its request types.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// UK numbers: `+44` or a leading `0`, then 9-10 digits; spaces and dashes allowed.
static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+44\s?|0)(?:\d[\s-]?){8,9}\d$").expect("valid phone regex"));

/// Position a staff member holds within a business.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum JobPosition {
    #[sea_orm(string_value = "kitchen")]
    Kitchen,
    #[sea_orm(string_value = "service")]
    Service,
    #[sea_orm(string_value = "pr")]
    Pr,
}

/// Staff domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Staff {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Henderson")]
    pub last_name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub job_position: JobPosition,
    #[schema(example = "+44 7700 900123")]
    pub phone_number: Option<String>,
    #[schema(example = 1)]
    pub business_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Staff creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateStaff {
    #[validate(length(min = 3, max = 50, message = "first_name must be between 3 and 50 characters"))]
    #[schema(example = "Alice")]
    pub first_name: String,
    #[validate(length(min = 3, max = 50, message = "last_name must be between 3 and 50 characters"))]
    #[schema(example = "Henderson")]
    pub last_name: String,
    #[validate(email(message = "email must be an email"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    pub job_position: JobPosition,
    #[validate(regex(path = *PHONE_NUMBER_REGEX, message = "Invalid phone number provided"))]
    #[serde(default)]
    #[schema(example = "+44 7700 900123")]
    pub phone_number: Option<String>,
}

/// Staff partial update; omitted fields keep their stored values
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStaff {
    #[validate(length(min = 3, max = 50, message = "first_name must be between 3 and 50 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 3, max = 50, message = "last_name must be between 3 and 50 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    pub job_position: Option<JobPosition>,
    /// `null` clears the stored number
    #[validate(regex(path = *PHONE_NUMBER_REGEX, message = "Invalid phone number provided"))]
    #[serde(default, deserialize_with = "super::double_option")]
    #[schema(value_type = Option<String>)]
    pub phone_number: Option<Option<String>>,
}

impl Staff {
    /// Apply a shallow merge of `changes` over this staff member.
    ///
    /// The owning business never changes here.
    pub fn apply(&mut self, changes: UpdateStaff) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(job_position) = changes.job_position {
            self.job_position = job_position;
        }
        if let Some(phone_number) = changes.phone_number {
            self.phone_number = phone_number;
        }
        self.updated_at = Utc::now();
    }
}
