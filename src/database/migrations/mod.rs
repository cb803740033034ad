//! SeaORM migrations for multi-database support
//!
//! Migrations are written against the schema builder so the same definitions
//! run on SQLite, PostgreSQL, and MySQL.

use sea_orm_migration::prelude::*;

pub mod m20240105_090000_create_contacts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240105_090000_create_contacts::Migration)]
    }
}
