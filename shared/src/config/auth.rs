//! Authentication configuration module

use serde::{Deserialize, Serialize};

/// Authentication configuration for JWT signing and password hashing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign access tokens (HS256)
    pub jwt_secret: String,

    /// Access token lifetime in seconds
    pub token_expiry_seconds: i64,

    /// Cost factor for bcrypt password hashing
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me-in-production"),
            token_expiry_seconds: 3600,
            bcrypt_cost: 12,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret);
        let token_expiry_seconds = std::env::var("TOKEN_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.token_expiry_seconds);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bcrypt_cost);

        Self {
            jwt_secret,
            token_expiry_seconds,
            bcrypt_cost,
        }
    }
}
