//! Business domain entity and its request types.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Kind of venue a business operates.
///
/// Stored as its lowercase name so the column is portable across backends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    #[sea_orm(string_value = "restaurant")]
    Restaurant,
    #[sea_orm(string_value = "bar")]
    Bar,
    #[sea_orm(string_value = "hotel")]
    Hotel,
    #[sea_orm(string_value = "club")]
    Club,
    #[sea_orm(string_value = "cafe")]
    Cafe,
}

/// Business domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Business {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "The Crown")]
    pub name: String,
    #[schema(example = "London")]
    pub location: String,
    pub business_type: Option<BusinessType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Business creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBusiness {
    #[validate(length(min = 3, max = 50, message = "name must be between 3 and 50 characters"))]
    #[schema(example = "The Crown")]
    pub name: String,
    #[validate(length(min = 3, max = 50, message = "location must be between 3 and 50 characters"))]
    #[schema(example = "London")]
    pub location: String,
    #[serde(default)]
    pub business_type: Option<BusinessType>,
}

/// Business partial update; omitted fields keep their stored values
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBusiness {
    #[validate(length(min = 3, max = 50, message = "name must be between 3 and 50 characters"))]
    #[schema(example = "The Crown & Anchor")]
    pub name: Option<String>,
    #[validate(length(min = 3, max = 50, message = "location must be between 3 and 50 characters"))]
    pub location: Option<String>,
    /// `null` clears the stored type
    #[serde(default, deserialize_with = "super::double_option")]
    #[schema(value_type = Option<BusinessType>)]
    pub business_type: Option<Option<BusinessType>>,
}

impl Business {
    /// Apply a shallow merge of `changes` over this business.
    pub fn apply(&mut self, changes: UpdateBusiness) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(business_type) = changes.business_type {
            self.business_type = business_type;
        }
        self.updated_at = Utc::now();
    }
}
