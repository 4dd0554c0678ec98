//! Order intake
//!
//! Turns a submitted [`OrderCreate`] into a persisted [`Order`]. Checks run in
//! a fixed order and the first failure wins, so the waiter always sees the
//! most basic problem first:
//!
//! 1. waiter name (trimmed, required, max length)
//! 2. quantities (0 = unselected, negative or too large rejected, duplicates summed)
//! 3. at least one line left
//! 4. every drink offered right now

use shared::models::{Order, OrderCreate, OrderLine};
use sqlx::SqlitePool;

use crate::db::repository::{drink, order};
use crate::utils::validation::{MAX_QUANTITY, MAX_WAITER_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Validated order, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub waiter_name: String,
    /// One line per drink, in first-seen order
    pub lines: Vec<OrderLine>,
}

/// Validate and normalize a submission without touching the store
pub fn normalize(payload: OrderCreate) -> AppResult<NewOrder> {
    let waiter_name = payload.waiter_name.trim().to_string();
    if waiter_name.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::WaiterNameRequired,
            "Please enter your name",
        ));
    }
    validate_required_text(&waiter_name, "waiter_name", MAX_WAITER_NAME_LEN)?;

    let mut lines: Vec<OrderLine> = Vec::with_capacity(payload.items.len());
    for item in payload.items {
        check_quantity(item.drink_id, item.quantity)?;
        if item.quantity == 0 {
            continue;
        }

        match lines.iter_mut().find(|l| l.drink_id == item.drink_id) {
            Some(existing) => {
                existing.quantity += item.quantity;
                check_quantity(existing.drink_id, existing.quantity)?;
            }
            None => lines.push(item),
        }
    }

    if lines.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::OrderEmpty,
            "Please select at least one drink",
        ));
    }

    Ok(NewOrder { waiter_name, lines })
}

fn check_quantity(drink_id: i64, quantity: i64) -> AppResult<()> {
    if !(0..=MAX_QUANTITY).contains(&quantity) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("Quantity must be between 0 and {MAX_QUANTITY}, got {quantity}"),
        )
        .with_detail("drink_id", drink_id));
    }
    Ok(())
}

/// Every line must reference a drink that is currently offered
pub async fn ensure_available(pool: &SqlitePool, lines: &[OrderLine]) -> AppResult<()> {
    for line in lines {
        let offered = drink::find_by_id(pool, line.drink_id)
            .await?
            .filter(|d| d.is_active);
        if offered.is_none() {
            return Err(AppError::with_message(
                ErrorCode::DrinkUnavailable,
                format!("Drink {} is not available", line.drink_id),
            )
            .with_detail("drink_id", line.drink_id));
        }
    }
    Ok(())
}

/// Validate and persist a new order
pub async fn submit(pool: &SqlitePool, payload: OrderCreate) -> AppResult<Order> {
    let new_order = normalize(payload)?;
    ensure_available(pool, &new_order.lines).await?;

    let created = order::create(pool, &new_order.waiter_name, &new_order.lines).await?;

    tracing::info!(
        order_id = created.id,
        waiter = %created.waiter_name,
        items = created.items.len(),
        total = %created.total,
        "Order recorded"
    );

    Ok(created)
}
