//! MySQL connection pool

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use blog_shared::config::DatabaseConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::InfrastructureError;

/// Shared MySQL connection pool
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
    max_connections: u32,
}

impl DatabasePool {
    /// Connect to the database described by `config`
    ///
    /// Embedded migrations are applied when `config.run_migrations` is set.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        if !config.url.starts_with("mysql://") {
            return Err(InfrastructureError::Config(format!(
                "Unsupported database URL scheme: {}",
                config.url.split("://").next().unwrap_or_default()
            )));
        }

        let connect_options = MySqlConnectOptions::from_str(&config.url)
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Duration::from_secs(config.idle_timeout))
            .max_lifetime(Duration::from_secs(config.max_lifetime))
            .test_before_acquire(true)
            .connect_with(connect_options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create database pool");
                InfrastructureError::Database(e)
            })?;

        tracing::info!(
            max_connections = config.max_connections,
            "Database connection pool established"
        );

        let db = Self {
            pool,
            max_connections: config.max_connections,
        };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Apply the embedded schema migrations
    pub async fn run_migrations(&self) -> Result<(), InfrastructureError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Underlying SQLx pool
    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip a trivial query
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let row: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&self.pool).await?;
        Ok(row.0 == 1)
    }

    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle() as u32,
            max_connections: self.max_connections,
        }
    }

    /// Close all connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Point-in-time pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_connections: u32,
}

impl fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
