//! Unit of Work pattern implementation.
//!
//! Centralizes access to the repositories so services depend on one
//! injectable handle instead of three.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    BusinessRepository, BusinessStore, StaffRepository, StaffStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get business repository
    fn businesses(&self) -> Arc<dyn BusinessRepository>;

    /// Get staff repository
    fn staff(&self) -> Arc<dyn StaffRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    business_repo: Arc<BusinessStore>,
    staff_repo: Arc<StaffStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            business_repo: Arc::new(BusinessStore::new(db.clone())),
            staff_repo: Arc::new(StaffStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn businesses(&self) -> Arc<dyn BusinessRepository> {
        self.business_repo.clone()
    }

    fn staff(&self) -> Arc<dyn StaffRepository> {
        self.staff_repo.clone()
    }
}
