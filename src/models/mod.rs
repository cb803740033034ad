//! Domain models shared between the web, service and repository layers

use serde::{Deserialize, Serialize};

/// A persisted contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    /// Timestamp of the most recent persisted contact, exactly as the client sent it
    pub last_contact: String,
    pub birthday: Option<String>,
}

/// Which branch of an upsert was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// A validated "contact logged" event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLogEvent {
    /// Contact name, the unique key of the record
    pub name: String,
    /// Caller identifier; accepted and logged but not persisted
    pub owner_id: String,
    pub date: String,
    pub birthday: Option<String>,
}

/// What handling a log event did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    /// Already logged today; the store was not touched
    Suppressed,
    Created,
    Updated,
}

impl From<UpsertOutcome> for LogOutcome {
    fn from(outcome: UpsertOutcome) -> Self {
        match outcome {
            UpsertOutcome::Created => LogOutcome::Created,
            UpsertOutcome::Updated => LogOutcome::Updated,
        }
    }
}

impl LogOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOutcome::Suppressed => "suppressed",
            LogOutcome::Created => "created",
            LogOutcome::Updated => "updated",
        }
    }
}

impl std::fmt::Display for LogOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
