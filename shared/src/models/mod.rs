//! Data models
//!
//! Shared between bar-server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`
//! where every column maps 1:1; rows carrying money are mapped by hand.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod drink;
pub mod order;
pub mod station;

// Re-exports
pub use drink::*;
pub use order::*;
pub use station::*;
