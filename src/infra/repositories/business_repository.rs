//! Business repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::business::{self, ActiveModel, Entity as BusinessEntity};
use crate::domain::{Business, CreateBusiness};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Business repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// List every business ordered by id
    async fn list(&self) -> AppResult<Vec<Business>>;

    /// Find business by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Business>>;

    /// Insert a new business
    async fn create(&self, input: CreateBusiness) -> AppResult<Business>;

    /// Write every mutable field of `business` back to its row
    async fn save(&self, business: Business) -> AppResult<Business>;

    /// Hard delete by id, returning whether a row was removed.
    /// Staff rows go with it through the foreign key cascade.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed implementation of BusinessRepository
pub struct BusinessStore {
    db: DatabaseConnection,
}

impl BusinessStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BusinessRepository for BusinessStore {
    async fn list(&self) -> AppResult<Vec<Business>> {
        let models = BusinessEntity::find()
            .order_by_asc(business::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Business::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Business>> {
        let result = BusinessEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Business::from))
    }

    async fn create(&self, input: CreateBusiness) -> AppResult<Business> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            name: Set(input.name),
            location: Set(input.location),
            business_type: Set(input.business_type),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Business::from(model))
    }

    async fn save(&self, business: Business) -> AppResult<Business> {
        let active_model = ActiveModel {
            id: Set(business.id),
            name: Set(business.name),
            location: Set(business.location),
            business_type: Set(business.business_type),
            created_at: Set(business.created_at),
            updated_at: Set(business.updated_at),
        };

        let model = active_model.update(&self.db).await?;
        Ok(Business::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = BusinessEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
