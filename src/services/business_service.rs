//! Business service - Business CRUD use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Business, CreateBusiness, UpdateBusiness};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Business service trait for dependency injection.
#[async_trait]
pub trait BusinessService: Send + Sync {
    /// All businesses, ordered by id
    async fn list_businesses(&self) -> AppResult<Vec<Business>>;

    async fn get_business(&self, id: i32) -> AppResult<Business>;

    async fn create_business(&self, input: CreateBusiness) -> AppResult<Business>;

    /// Shallow merge of the provided fields
    async fn update_business(&self, id: i32, changes: UpdateBusiness) -> AppResult<Business>;

    /// Hard delete; the business's staff are removed with it
    async fn delete_business(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of BusinessService using Unit of Work.
pub struct BusinessManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BusinessManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> BusinessService for BusinessManager<U> {
    async fn list_businesses(&self) -> AppResult<Vec<Business>> {
        self.uow.businesses().list().await
    }

    async fn get_business(&self, id: i32) -> AppResult<Business> {
        let business = self.uow.businesses().find_by_id(id).await?;
        if business.is_none() {
            tracing::debug!(business_id = id, "Business lookup missed");
        }
        business.ok_or_not_found("Business")
    }

    async fn create_business(&self, input: CreateBusiness) -> AppResult<Business> {
        let business = self.uow.businesses().create(input).await?;
        tracing::info!(business_id = business.id, name = %business.name, "Business created");
        Ok(business)
    }

    async fn update_business(&self, id: i32, changes: UpdateBusiness) -> AppResult<Business> {
        let mut business = self.get_business(id).await?;
        business.apply(changes);
        self.uow.businesses().save(business).await
    }

    async fn delete_business(&self, id: i32) -> AppResult<()> {
        if !self.uow.businesses().delete(id).await? {
            return Err(AppError::NotFound("Business"));
        }
        tracing::info!(business_id = id, "Business deleted");
        Ok(())
    }
}
