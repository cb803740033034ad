//! Web handlers module
//!
//! HTTP request handlers. Each handler stays thin and delegates to the
//! service layer.

pub mod health;
pub mod log;
