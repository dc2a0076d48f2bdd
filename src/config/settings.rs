//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_NAME, DEFAULT_DB_PASSWORD,
    DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_JWT_EXPIRATION_MINUTES, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MAX_JWT_EXPIRATION_MINUTES, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Secret used only by debug builds when none is configured.
const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    jwt_secret: String,
    pub jwt_expiration_minutes: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Build a configuration with defaults for everything except the
    /// database location and signing secret.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            jwt_secret: jwt_secret.into(),
            jwt_expiration_minutes: DEFAULT_JWT_EXPIRATION_MINUTES,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// `DATABASE_URL` wins over the individual `DB_*` variables.
    ///
    /// # Errors
    /// Fails if the JWT secret is missing in a release build or shorter than
    /// the required minimum, or if `JWT_EXPIRATION_MINUTES` is outside
    /// `1..=MAX_JWT_EXPIRATION_MINUTES`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("APP_JWT_SECRET").or_else(|_| env::var("JWT_SECRET")) {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("APP_JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "APP_JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "APP_JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        let jwt_expiration_minutes = check_jwt_expiration(
            parse_var("JWT_EXPIRATION_MINUTES").unwrap_or(DEFAULT_JWT_EXPIRATION_MINUTES),
        )?;

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| compose_database_url());

        Ok(Self {
            database_url,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            jwt_secret,
            jwt_expiration_minutes,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn check_jwt_expiration(minutes: i64) -> AppResult<i64> {
    if (1..=MAX_JWT_EXPIRATION_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(AppError::internal(format!(
            "JWT_EXPIRATION_MINUTES must be between 1 and {}, got {}",
            MAX_JWT_EXPIRATION_MINUTES, minutes
        )))
    }
}

/// Assemble a PostgreSQL URL from `DB_HOST`, `DB_PORT`, `DB_USER`,
/// `DB_PASSWORD` and `DB_NAME`.
fn compose_database_url() -> String {
    let host = env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string());
    let port: u16 = parse_var("DB_PORT").unwrap_or(DEFAULT_DB_PORT);
    let user = env::var("DB_USER").unwrap_or_else(|_| DEFAULT_DB_USER.to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_else(|_| DEFAULT_DB_PASSWORD.to_string());
    let name = env::var("DB_NAME").unwrap_or_else(|_| DEFAULT_DB_NAME.to_string());

    format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new("sqlite::memory:", DEV_JWT_SECRET);

        assert_eq!(config.jwt_expiration_minutes, DEFAULT_JWT_EXPIRATION_MINUTES);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.jwt_secret_bytes(), DEV_JWT_SECRET.as_bytes());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("postgres://user:hunter2@db/app", DEV_JWT_SECRET);
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains(DEV_JWT_SECRET));
    }

    #[test]
    fn test_jwt_expiration_bounds() {
        assert_eq!(check_jwt_expiration(120).unwrap(), 120);
        assert_eq!(
            check_jwt_expiration(MAX_JWT_EXPIRATION_MINUTES).unwrap(),
            MAX_JWT_EXPIRATION_MINUTES
        );
        for out_of_range in [0, -5, MAX_JWT_EXPIRATION_MINUTES + 1, i64::MAX] {
            assert!(matches!(
                check_jwt_expiration(out_of_range),
                Err(AppError::Internal(_))
            ));
        }
    }
}
