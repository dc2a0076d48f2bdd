//! Authentication service - Credential checks and JWTs.
//!
//! Two credential strategies live here: the local one (username and
//! password against the stored bcrypt hash) and the bearer one (a signed
//! token whose `sub` resolves to an existing user).

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{Config, BCRYPT_COST};
use crate::domain::{AuthResponse, Credentials, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Verified against when the username is unknown, so both login
/// failures cost one bcrypt verification.
static DUMMY_HASH: Lazy<String> =
    Lazy::new(|| bcrypt::hash("timing-equaliser", BCRYPT_COST).unwrap_or_default());

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub sub: i32,
    pub iat: i64,
    pub exp: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Local strategy login
    async fn login(&self, credentials: Credentials) -> AppResult<AuthResponse>;

    /// Check a username/password pair, returning the matching user
    async fn validate_credentials(&self, username: &str, password: &str) -> AppResult<User>;

    /// Sign a token for `user`
    fn issue_token(&self, user: &User) -> AppResult<String>;

    /// Verify signature and expiry, returning the claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Bearer strategy: verify the token and load its subject
    async fn authenticate(&self, token: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

/// Hash on the blocking pool; bcrypt at cost 12 takes long enough to
/// stall an async worker.
pub(crate) async fn hash_password(plain: String) -> AppResult<Password> {
    tokio::task::spawn_blocking(move || Password::new(&plain))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))?
}

async fn verify_password(hash: String, plain: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || Password::from_hash(hash).verify(&plain))
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, credentials: Credentials) -> AppResult<AuthResponse> {
        if !credentials.is_complete() {
            tracing::warn!("Login failed: missing credentials");
            return Err(AppError::InvalidCredentials);
        }

        let user = self
            .validate_credentials(&credentials.username, &credentials.password)
            .await?;
        let token = self.issue_token(&user)?;
        Ok(AuthResponse::new(&user, token))
    }

    async fn validate_credentials(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self.uow.users().find_by_username(username).await?;

        let stored_hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => DUMMY_HASH.clone(),
        };
        let password_valid = verify_password(stored_hash, password.to_string()).await?;

        match user {
            None => {
                tracing::warn!(username, "Login failed: unknown username");
                Err(AppError::InvalidCredentials)
            }
            Some(_) if !password_valid => {
                tracing::warn!(username, "Login failed: password mismatch");
                Err(AppError::InvalidCredentials)
            }
            Some(user) => Ok(user),
        }
    }

    fn issue_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = Duration::try_minutes(self.config.jwt_expiration_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| AppError::internal("Token lifetime out of range"))?;

        let claims = Claims {
            username: user.username.clone(),
            sub: user.id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(token)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    async fn authenticate(&self, token: &str) -> AppResult<User> {
        let claims = self.verify_token(token)?;

        match self.uow.users().find_by_id(claims.sub).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(user_id = claims.sub, "Token subject no longer exists");
                Err(AppError::Unauthorized)
            }
        }
    }
}
