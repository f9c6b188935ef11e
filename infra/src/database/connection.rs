//! MySQL connection pool construction.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use locadora_core::errors::DomainError;
use locadora_shared::config::DatabaseConfig;

/// Build a MySQL connection pool from the database configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to connect to database: {}", e),
        })?;

    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}
