//! Input validation helpers
//!
//! Centralized length/range limits and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits live here.

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Waiter names (printed on the station monitors)
pub const MAX_WAITER_NAME_LEN: usize = 30;

/// Drink names
pub const MAX_DRINK_NAME_LEN: usize = 40;

/// Maximum quantity per order line
pub const MAX_QUANTITY: i64 = 9999;

/// Maximum drink price in cents (€10,000)
pub const MAX_PRICE_CENTS: i64 = 1_000_000;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// Length is counted in characters, not bytes ("Jürgen" is 6).
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}
