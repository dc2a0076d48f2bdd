//! User service - Account registration.

use async_trait::async_trait;
use std::sync::Arc;

use super::auth_service::hash_password;
use crate::domain::{CreateUser, NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create an account after the confirmation and uniqueness checks.
    /// The stored password is a bcrypt hash.
    async fn register(&self, input: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn register(&self, input: CreateUser) -> AppResult<User> {
        if input.password != input.password_confirmation {
            return Err(AppError::bad_request("Passwords do not match"));
        }

        let taken = self
            .uow
            .users()
            .find_by_username_or_email(&input.username, &input.email)
            .await?;
        if taken.is_some() {
            tracing::debug!(username = %input.username, "Registration rejected: taken");
            return Err(AppError::bad_request("username or email is already taken"));
        }

        let password = hash_password(input.password).await?;
        let user = self
            .uow
            .users()
            .create(NewUser {
                username: input.username,
                password_hash: password.into_string(),
                email: input.email,
                first_name: input.first_name,
                last_name: input.last_name,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");

        Ok(user)
    }
}
