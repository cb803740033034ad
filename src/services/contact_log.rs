//! Contact log service
//!
//! Handles one validated "contact logged" event: the contact cache decides
//! whether the contact was already persisted today, and only if not is the
//! record written through to the contact store.
//!
//! The cache is consulted and updated before the store is called and nothing
//! is rolled back, so a store failure leaves the cache already advanced.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::ContactCache;
use crate::database::repositories::ContactStore;
use crate::errors::{AppError, AppResult};
use crate::models::{ContactLogEvent, LogOutcome};

#[derive(Clone)]
pub struct ContactLogService {
    cache: Arc<ContactCache>,
    store: Arc<dyn ContactStore>,
    store_timeout: Duration,
}

impl ContactLogService {
    pub fn new(
        cache: Arc<ContactCache>,
        store: Arc<dyn ContactStore>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            cache,
            store,
            store_timeout,
        }
    }

    /// Record a contact event, writing to the store unless it was already
    /// logged on the same calendar day.
    pub async fn record(&self, event: &ContactLogEvent) -> AppResult<LogOutcome> {
        debug!(
            contact = %event.name,
            owner_id = %event.owner_id,
            date = %event.date,
            "Recording contact event"
        );

        if self.cache.seen_today(&event.name, &event.date)? {
            debug!(contact = %event.name, "Already logged today, skipping store update");
            return Ok(LogOutcome::Suppressed);
        }

        info!(contact = %event.name, "Sending update to contact store");

        let outcome = tokio::time::timeout(
            self.store_timeout,
            self.store.upsert(&event.name, &event.date, event.birthday.clone()),
        )
        .await
        .map_err(|_| {
            warn!(
                contact = %event.name,
                timeout = ?self.store_timeout,
                "Contact store did not respond in time"
            );
            AppError::timeout("contact upsert", self.store_timeout)
        })??;

        Ok(outcome.into())
    }

    /// Check that the contact store is reachable within the store timeout
    pub async fn ping_store(&self) -> AppResult<()> {
        tokio::time::timeout(self.store_timeout, self.store.ping())
            .await
            .map_err(|_| AppError::timeout("contact store ping", self.store_timeout))??;
        Ok(())
    }

    pub fn cache(&self) -> &ContactCache {
        &self.cache
    }
}
