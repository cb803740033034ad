//! Utility modules for the keepintouch service
//!
//! This module contains reusable utilities that can be used
//! across different parts of the system.

pub mod datetime;

// Re-export commonly used types for convenience
pub use datetime::{ContactTimestamp, DateTimeError};
