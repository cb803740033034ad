//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use keepintouch::{
    cache::ContactCache,
    config::DatabaseConfig,
    database::{Database, repositories::ContactSeaOrmRepository},
    services::ContactLogService,
    web::AppState,
};

/// Fresh, migrated in-memory SQLite database
pub async fn create_test_database() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    let database = Database::new(&config)
        .await
        .expect("Failed to create test database");
    database.migrate().await.expect("Failed to run migrations");
    database
}

pub fn create_test_repository(database: &Database) -> ContactSeaOrmRepository {
    ContactSeaOrmRepository::new(database.connection())
}

pub fn create_test_app_state(database: &Database) -> AppState {
    let service = ContactLogService::new(
        Arc::new(ContactCache::new()),
        Arc::new(create_test_repository(database)),
        Duration::from_secs(5),
    );
    AppState::new(service)
}
