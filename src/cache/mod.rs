//! In-memory contact cache
//!
//! Remembers the last timestamp seen for each contact name so that repeat
//! logs on the same calendar day can skip the store write. The cache is owned
//! by the service instance and lives only as long as the process; it is never
//! written back to the store and nothing is ever evicted.
//!
//! Duplicate detection always compares against the value recorded by the
//! *previous* call, and the entry is then replaced by the incoming timestamp
//! whether or not it was a duplicate. After a successful call the entry holds
//! the latest timestamp passed in.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::utils::datetime::{DateTimeError, same_day};

/// Process-local map of contact name to last-seen timestamp string
#[derive(Debug, Default)]
pub struct ContactCache {
    entries: Mutex<HashMap<String, String>>,
}

impl ContactCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `name` was already seen on the same calendar day as `date`,
    /// then record `date` as the latest timestamp for `name`.
    ///
    /// A timestamp that cannot be parsed leaves the entry untouched and returns
    /// the parse error. The very first timestamp for a name is stored without
    /// being parsed.
    pub fn seen_today(&self, name: &str, date: &str) -> Result<bool, DateTimeError> {
        let mut entries = self.lock();

        let duplicate = match entries.get(name) {
            Some(previous) => {
                let duplicate = same_day(previous, date)?;
                if duplicate {
                    debug!(contact = name, previous = %previous, "Contact already seen today");
                }
                duplicate
            }
            None => false,
        };

        entries.insert(name.to_string(), date.to_string());
        Ok(duplicate)
    }

    /// Last timestamp recorded for `name`
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-written, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MORNING: &str = "01/05/24, 09:00:00 AM EST";
    const EVENING: &str = "01/05/24, 07:45:00 PM EST";
    const NEXT_DAY: &str = "01/06/24, 08:00:00 AM EST";

    #[test]
    fn test_first_sighting_is_not_duplicate() {
        let cache = ContactCache::new();
        assert!(cache.is_empty());

        assert!(!cache.seen_today("Alice", MORNING).unwrap());
        assert_eq!(cache.get("Alice").as_deref(), Some(MORNING));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_same_day_is_duplicate_and_advances_entry() {
        let cache = ContactCache::new();
        cache.seen_today("Alice", MORNING).unwrap();

        assert!(cache.seen_today("Alice", EVENING).unwrap());
        assert_eq!(cache.get("Alice").as_deref(), Some(EVENING));
    }

    #[test]
    fn test_later_day_is_not_duplicate() {
        let cache = ContactCache::new();
        cache.seen_today("Alice", EVENING).unwrap();

        assert!(!cache.seen_today("Alice", NEXT_DAY).unwrap());
        assert_eq!(cache.get("Alice").as_deref(), Some(NEXT_DAY));
    }

    #[test]
    fn test_names_are_independent() {
        let cache = ContactCache::new();
        cache.seen_today("Alice", MORNING).unwrap();

        assert!(!cache.seen_today("Bob", EVENING).unwrap());
        assert_eq!(cache.get("Alice").as_deref(), Some(MORNING));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_duplicate_check_uses_previous_value_only() {
        let cache = ContactCache::new();
        cache.seen_today("Alice", MORNING).unwrap();
        cache.seen_today("Alice", NEXT_DAY).unwrap();

        // Compared against NEXT_DAY, not the first MORNING entry.
        assert!(!cache.seen_today("Alice", EVENING).unwrap());
        assert_eq!(cache.get("Alice").as_deref(), Some(EVENING));
    }

    #[test]
    fn test_parse_failure_leaves_entry_untouched() {
        let cache = ContactCache::new();
        cache.seen_today("Alice", MORNING).unwrap();

        assert!(cache.seen_today("Alice", "tomorrow-ish").is_err());
        assert_eq!(cache.get("Alice").as_deref(), Some(MORNING));
    }

    #[test]
    fn test_first_entry_is_stored_unparsed() {
        let cache = ContactCache::new();
        assert!(!cache.seen_today("Alice", "not a date").unwrap());

        // The bad value only surfaces on the next comparison.
        assert!(cache.seen_today("Alice", MORNING).is_err());
        assert_eq!(cache.get("Alice").as_deref(), Some("not a date"));
    }
}
