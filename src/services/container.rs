//! Service Container - Centralized service access.
//!
//! Handlers depend on the service traits only; this is the one place
//! that picks the concrete implementations.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, BusinessManager, BusinessService, StaffManager, StaffService,
    UserManager, UserService,
};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get business service
    fn businesses(&self) -> Arc<dyn BusinessService>;

    /// Get staff service
    fn staff(&self) -> Arc<dyn StaffService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    business_service: Arc<dyn BusinessService>,
    staff_service: Arc<dyn StaffService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        business_service: Arc<dyn BusinessService>,
        staff_service: Arc<dyn StaffService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            business_service,
            staff_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(Authenticator::new(uow.clone(), config)),
            Arc::new(UserManager::new(uow.clone())),
            Arc::new(BusinessManager::new(uow.clone())),
            Arc::new(StaffManager::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn businesses(&self) -> Arc<dyn BusinessService> {
        self.business_service.clone()
    }

    fn staff(&self) -> Arc<dyn StaffService> {
        self.staff_service.clone()
    }
}
