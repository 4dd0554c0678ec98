//! Shared types for the festival bar
//!
//! Domain models exchanged over the HTTP API and the unified error system
//! used by `bar-server`.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
