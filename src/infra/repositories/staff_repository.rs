//! Staff repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::staff::{self, ActiveModel, Entity as StaffEntity};
use crate::domain::{CreateStaff, Staff};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Staff repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// Staff employed by one business, ordered by id
    async fn list_by_business(&self, business_id: i32) -> AppResult<Vec<Staff>>;

    /// Find staff member by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Staff>>;

    /// Insert a staff member under `business_id`
    async fn create(&self, business_id: i32, input: CreateStaff) -> AppResult<Staff>;

    /// Write every mutable field of `staff` back to its row
    async fn save(&self, staff: Staff) -> AppResult<Staff>;

    /// Hard delete by id, returning whether a row was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed implementation of StaffRepository
pub struct StaffStore {
    db: DatabaseConnection,
}

impl StaffStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StaffRepository for StaffStore {
    async fn list_by_business(&self, business_id: i32) -> AppResult<Vec<Staff>> {
        let models = StaffEntity::find()
            .filter(staff::Column::BusinessId.eq(business_id))
            .order_by_asc(staff::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Staff::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Staff>> {
        let result = StaffEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Staff::from))
    }

    async fn create(&self, business_id: i32, input: CreateStaff) -> AppResult<Staff> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            email: Set(input.email),
            job_position: Set(input.job_position),
            phone_number: Set(input.phone_number),
            business_id: Set(business_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Staff::from(model))
    }

    async fn save(&self, staff: Staff) -> AppResult<Staff> {
        let active_model = ActiveModel {
            id: Set(staff.id),
            first_name: Set(staff.first_name),
            last_name: Set(staff.last_name),
            email: Set(staff.email),
            job_position: Set(staff.job_position),
            phone_number: Set(staff.phone_number),
            business_id: Set(staff.business_id),
            created_at: Set(staff.created_at),
            updated_at: Set(staff.updated_at),
        };

        let model = active_model.update(&self.db).await?;
        Ok(Staff::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = StaffEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
