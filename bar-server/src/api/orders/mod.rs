//! Order API Module
//!
//! Waiter-facing routes: the order form, order submission, the per-waiter
//! list and closing a delivered order.

mod form;
mod handler;

pub use form::OrderSubmission;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::order_form).post(handler::create))
        // Both routes share the segment name; the router rejects differing
        // parameter names at the same position. {key} is a waiter name or an order id.
        .route("/orders/{key}", get(handler::list_for_waiter))
        .route("/orders/{key}/close", post(handler::close))
}
