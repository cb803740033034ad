//! SeaORM repository implementations
//!
//! Repositories work across SQLite, PostgreSQL, and MySQL and are consumed
//! through the traits in [`traits`].

pub mod contact;
pub mod traits;

// Re-export for convenience
pub use contact::ContactSeaOrmRepository;
pub use traits::ContactStore;
