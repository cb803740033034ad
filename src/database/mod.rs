//! SeaORM-based database implementation
//!
//! This module provides database-agnostic access to the contact store using
//! SeaORM with support for:
//! - SQLite (default, auto-created on first start)
//! - PostgreSQL
//! - MySQL

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database as SeaOrmDatabase, DatabaseConnection};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::DatabaseConfig;

pub mod migrations;
pub mod repositories;

const IN_MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Database connection manager with multi-database support
#[derive(Clone)]
pub struct Database {
    /// Pooled connection; each query acquires and releases its own connection
    pub connection: Arc<DatabaseConnection>,
    /// Database type for specific optimizations
    pub database_type: DatabaseType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    SQLite,
    PostgreSQL,
    MySQL,
}

impl Database {
    /// Create a new database connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let database_type = Self::detect_database_type(&config.url)?;

        info!("Connecting to {} database", database_type.as_str());

        // For SQLite, modify URL to enable auto-creation if needed
        let connection_url = match database_type {
            DatabaseType::SQLite => Self::ensure_sqlite_auto_creation(&config.url)?,
            _ => config.url.clone(),
        };

        let connect_options = Self::connect_options(&connection_url, config);

        let connection = match SeaOrmDatabase::connect(connect_options).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!("Database connection failed: {:?}", e);
                let mut source = e.source();
                let mut level = 0;
                while let Some(err) = source {
                    tracing::error!("  Level {}: {}", level, err);
                    source = err.source();
                    level += 1;
                }
                return Err(anyhow::anyhow!(
                    "Failed to connect to {} database: {}",
                    database_type.as_str(),
                    e
                ));
            }
        };

        debug!("Database connection established successfully");

        Ok(Self {
            connection: Arc::new(connection),
            database_type,
        })
    }

    /// Pool settings for `url`
    fn connect_options(url: &str, config: &DatabaseConfig) -> ConnectOptions {
        let mut connect_options = ConnectOptions::new(url);
        connect_options
            .connect_timeout(config.connect_timeout)
            .acquire_timeout(config.store_timeout)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        if Self::is_in_memory(url) {
            // Every pooled connection to `:memory:` opens its own empty database,
            // so hold exactly one and outlast the pool's default recycling.
            connect_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(IN_MEMORY_CONNECTION_LIFETIME)
                .max_lifetime(IN_MEMORY_CONNECTION_LIFETIME);
        } else {
            connect_options
                .max_connections(config.max_connections)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(1800));
        }

        connect_options
    }

    /// Detect the database type from the URL
    fn detect_database_type(url: &str) -> Result<DatabaseType> {
        if url.starts_with("sqlite:") {
            Ok(DatabaseType::SQLite)
        } else if url.starts_with("postgres:") || url.starts_with("postgresql:") {
            Ok(DatabaseType::PostgreSQL)
        } else if url.starts_with("mysql:") {
            Ok(DatabaseType::MySQL)
        } else {
            anyhow::bail!(
                "Unsupported database URL scheme (expected sqlite:, postgres: or mysql:)"
            );
        }
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// Ensure SQLite URL includes auto-creation mode if needed
    fn ensure_sqlite_auto_creation(url: &str) -> Result<String> {
        if url.contains("mode=") || Self::is_in_memory(url) {
            debug!("SQLite URL needs no modification: {}", url);
            return Ok(url.to_string());
        }

        let file_path = if let Some(path) = url.strip_prefix("sqlite://") {
            path
        } else if let Some(path) = url.strip_prefix("sqlite:") {
            path
        } else {
            anyhow::bail!("Invalid SQLite URL format: {}", url);
        };
        let file_path = file_path.split('?').next().unwrap_or(file_path);

        let path = std::path::Path::new(file_path);

        if path.exists() {
            debug!("SQLite database file already exists: {}", file_path);
            return Ok(url.to_string());
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create directory for SQLite database: {}",
                        parent.display()
                    )
                })?;
                info!("Created directory for SQLite database: {}", parent.display());
            }
        }

        let auto_create_url = if url.contains('?') {
            format!("{}&mode=rwc", url)
        } else {
            format!("{}?mode=rwc", url)
        };

        info!("Enabled SQLite auto-creation for {}", file_path);
        Ok(auto_create_url)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        use migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        info!(
            "Running database migrations for {}",
            self.database_type.as_str()
        );

        Migrator::up(&*self.connection, None)
            .await
            .context("Failed to run migrations")?;

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the pooled database connection
    pub fn connection(&self) -> Arc<DatabaseConnection> {
        self.connection.clone()
    }

    /// Get the database type
    pub fn database_type(&self) -> DatabaseType {
        self.database_type
    }
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::SQLite => "SQLite",
            DatabaseType::PostgreSQL => "PostgreSQL",
            DatabaseType::MySQL => "MySQL",
        }
    }
}

impl std::fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_database_type() {
        assert_eq!(
            Database::detect_database_type("sqlite://./data/keepintouch.db").unwrap(),
            DatabaseType::SQLite
        );
        assert_eq!(
            Database::detect_database_type("postgresql://u:p@localhost/contacts").unwrap(),
            DatabaseType::PostgreSQL
        );
        assert_eq!(
            Database::detect_database_type("mysql://u:p@localhost/contacts").unwrap(),
            DatabaseType::MySQL
        );
        assert!(Database::detect_database_type("mongodb+srv://cluster.example.net").is_err());
    }

    #[test]
    fn test_in_memory_url_is_untouched() {
        assert_eq!(
            Database::ensure_sqlite_auto_creation("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
    }

    #[test]
    fn test_explicit_mode_is_untouched() {
        assert_eq!(
            Database::ensure_sqlite_auto_creation("sqlite://./contacts.db?mode=ro").unwrap(),
            "sqlite://./contacts.db?mode=ro"
        );
    }

    #[test]
    fn test_in_memory_pool_keeps_single_connection() {
        let config = DatabaseConfig::default();

        let in_memory = Database::connect_options("sqlite::memory:", &config);
        assert_eq!(in_memory.get_max_connections(), Some(1));
        assert_eq!(in_memory.get_max_lifetime(), Some(IN_MEMORY_CONNECTION_LIFETIME));
        assert_eq!(in_memory.get_idle_timeout(), Some(IN_MEMORY_CONNECTION_LIFETIME));

        let on_disk = Database::connect_options("sqlite://./contacts.db?mode=rwc", &config);
        assert_eq!(on_disk.get_max_connections(), Some(config.max_connections));
        assert_eq!(on_disk.get_max_lifetime(), Some(Duration::from_secs(1800)));
    }

    #[tokio::test]
    async fn test_connect_and_migrate_in_memory() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let database = Database::new(&config).await.unwrap();
        assert_eq!(database.database_type(), DatabaseType::SQLite);

        database.migrate().await.unwrap();
        // Migrations are idempotent.
        database.migrate().await.unwrap();
    }
}
