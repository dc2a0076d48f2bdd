//! Staff service - Staff CRUD scoped to an owning business.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateStaff, Staff, UpdateStaff};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Staff service trait for dependency injection.
#[async_trait]
pub trait StaffService: Send + Sync {
    /// Staff of one business; fails with not-found when the business is absent
    async fn list_staff(&self, business_id: i32) -> AppResult<Vec<Staff>>;

    async fn get_staff(&self, id: i32) -> AppResult<Staff>;

    /// Create under `business_id`; nothing is written when the business is absent
    async fn create_staff(&self, business_id: i32, input: CreateStaff) -> AppResult<Staff>;

    /// Shallow merge of the provided fields
    async fn update_staff(&self, id: i32, changes: UpdateStaff) -> AppResult<Staff>;

    async fn delete_staff(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of StaffService using Unit of Work.
pub struct StaffManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StaffManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_business_exists(&self, business_id: i32) -> AppResult<()> {
        let business = self.uow.businesses().find_by_id(business_id).await?;
        if business.is_none() {
            tracing::debug!(business_id, "Staff request for unknown business");
        }
        business.ok_or_not_found("Business").map(|_| ())
    }
}

#[async_trait]
impl<U: UnitOfWork> StaffService for StaffManager<U> {
    async fn list_staff(&self, business_id: i32) -> AppResult<Vec<Staff>> {
        self.ensure_business_exists(business_id).await?;
        self.uow.staff().list_by_business(business_id).await
    }

    async fn get_staff(&self, id: i32) -> AppResult<Staff> {
        let staff = self.uow.staff().find_by_id(id).await?;
        if staff.is_none() {
            tracing::debug!(staff_id = id, "Staff lookup missed");
        }
        staff.ok_or_not_found("Staff")
    }

    async fn create_staff(&self, business_id: i32, input: CreateStaff) -> AppResult<Staff> {
        self.ensure_business_exists(business_id).await?;

        let staff = self.uow.staff().create(business_id, input).await?;
        tracing::info!(staff_id = staff.id, business_id, "Staff member created");
        Ok(staff)
    }

    async fn update_staff(&self, id: i32, changes: UpdateStaff) -> AppResult<Staff> {
        let mut staff = self.get_staff(id).await?;
        staff.apply(changes);
        self.uow.staff().save(staff).await
    }

    async fn delete_staff(&self, id: i32) -> AppResult<()> {
        if !self.uow.staff().delete(id).await? {
            return Err(AppError::NotFound("Staff"));
        }
        tracing::info!(staff_id = id, "Staff member deleted");
        Ok(())
    }
}
