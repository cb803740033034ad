//! Store traits consumed by the service layer

use async_trait::async_trait;

use crate::errors::RepositoryResult;
use crate::models::{Contact, UpsertOutcome};

/// Persistent storage for contact records, keyed by unique contact name
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Insert the contact if no record with `name` exists, otherwise overwrite
    /// `last_contact` and `birthday` on the existing record.
    ///
    /// `birthday` is written as given, so `None` clears a stored birthday.
    async fn upsert(
        &self,
        name: &str,
        last_contact: &str,
        birthday: Option<String>,
    ) -> RepositoryResult<UpsertOutcome>;

    /// Find a contact by exact name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Contact>>;

    /// Number of stored contacts
    async fn count(&self) -> RepositoryResult<u64>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepositoryResult<()>;
}
