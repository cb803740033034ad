//! Service layer
//!
//! Business logic lives here so that HTTP handlers stay thin.

pub mod contact_log;

pub use contact_log::ContactLogService;
