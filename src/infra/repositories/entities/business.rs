//! Business database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Business, BusinessType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "businesses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub location: String,
    pub business_type: Option<BusinessType>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::staff::Entity")]
    Staff,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Business {
    fn from(model: Model) -> Self {
        Business {
            id: model.id,
            name: model.name,
            location: model.location,
            business_type: model.business_type,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
