//! Staff database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{JobPosition, Staff};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "staff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub job_position: JobPosition,
    pub phone_number: Option<String>,
    pub business_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business::Entity",
        from = "Column::BusinessId",
        to = "super::business::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Business,
}

impl Related<super::business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Staff {
    fn from(model: Model) -> Self {
        Staff {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            job_position: model.job_position,
            phone_number: model.phone_number,
            business_id: model.business_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
