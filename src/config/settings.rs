//! Environment-backed application settings.
//!
//! The listen address is owned by the CLI layer (clap reads the same env
//! vars there); this struct carries only what the services need.

use std::env;

use super::constants::{DEFAULT_DATABASE_URL, MIN_JWT_SECRET_LENGTH};

/// Resolved runtime configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
}

// Secrets stay out of log output
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` first.
    ///
    /// # Panics
    /// Panics when `JWT_SECRET` is missing in a release build or shorter
    /// than [`MIN_JWT_SECRET_LENGTH`]. A server signing tokens with a
    /// guessable secret must not come up at all.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret: load_jwt_secret(),
        }
    }

    /// Build a configuration with an explicit secret (used by tests).
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Secret bytes for signing and verifying session tokens.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

fn load_jwt_secret() -> String {
    let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            tracing::warn!("JWT_SECRET not set, falling back to the insecure dev default");
            "dev-secret-key-minimum-32-chars!!".to_string()
        } else {
            panic!("JWT_SECRET must be set in release builds");
        }
    });

    assert!(
        secret.len() >= MIN_JWT_SECRET_LENGTH,
        "JWT_SECRET must be at least {} characters",
        MIN_JWT_SECRET_LENGTH
    );

    secret
}
