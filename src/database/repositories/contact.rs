//! SeaORM-based contact repository implementation

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, sea_query::Expr,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::entities::{contacts, prelude::Contacts};
use crate::errors::{RepositoryError, RepositoryResult};
use crate::models::{Contact, UpsertOutcome};

use super::traits::ContactStore;

/// SeaORM-based repository for contact records
#[derive(Clone)]
pub struct ContactSeaOrmRepository {
    connection: Arc<DatabaseConnection>,
}

impl ContactSeaOrmRepository {
    /// Create a new repository instance
    pub fn new(connection: Arc<DatabaseConnection>) -> Self {
        Self { connection }
    }

    async fn find_model(&self, name: &str) -> RepositoryResult<Option<contacts::Model>> {
        Contacts::find()
            .filter(contacts::Column::Name.eq(name))
            .one(&*self.connection)
            .await
            .map_err(|e| RepositoryError::query_failed("find contact by name", e.to_string()))
    }

    fn model_to_domain(model: contacts::Model) -> Contact {
        Contact {
            name: model.name,
            last_contact: model.last_contact,
            birthday: model.birthday,
        }
    }
}

#[async_trait]
impl ContactStore for ContactSeaOrmRepository {
    async fn upsert(
        &self,
        name: &str,
        last_contact: &str,
        birthday: Option<String>,
    ) -> RepositoryResult<UpsertOutcome> {
        // Lookup and write are separate statements; concurrent upserts for the
        // same name may interleave.
        match self.find_model(name).await? {
            None => {
                let active_model = contacts::ActiveModel {
                    name: Set(name.to_string()),
                    last_contact: Set(last_contact.to_string()),
                    birthday: Set(birthday),
                    ..Default::default()
                };

                active_model.insert(&*self.connection).await.map_err(|e| {
                    RepositoryError::query_failed("insert contact", e.to_string())
                })?;

                info!(contact = name, "New contact created");
                Ok(UpsertOutcome::Created)
            }
            Some(_) => {
                let result = Contacts::update_many()
                    .col_expr(contacts::Column::LastContact, Expr::value(last_contact))
                    .col_expr(contacts::Column::Birthday, Expr::value(birthday))
                    .filter(contacts::Column::Name.eq(name))
                    .exec(&*self.connection)
                    .await
                    .map_err(|e| RepositoryError::query_failed("update contact", e.to_string()))?;

                debug!(contact = name, rows = result.rows_affected, "Contact rows updated");
                info!(contact = name, "Contact updated");
                Ok(UpsertOutcome::Updated)
            }
        }
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Contact>> {
        Ok(self.find_model(name).await?.map(Self::model_to_domain))
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Contacts::find()
            .count(&*self.connection)
            .await
            .map_err(|e| RepositoryError::query_failed("count contacts", e.to_string()))
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.connection
            .ping()
            .await
            .map_err(|e| RepositoryError::connection_failed(e.to_string()))
    }
}
