//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Drink, Station};

/// Order entity
///
/// `items` and `total` are not columns; the repository fills them from the
/// joined item rows. Drink attributes are read live, so `total` follows the
/// current catalog price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub waiter_name: String,
    /// Creation time (UTC epoch millis)
    pub created_at: i64,
    pub schankwagen_done: bool,
    pub suesskram_done: bool,
    /// Closed by the waiter after handing the drinks to the guest
    pub delivered: bool,
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default, with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl Order {
    /// Attach items and recompute the total from them
    pub fn with_items(mut self, items: Vec<OrderItem>) -> Self {
        self.total = order_total(&items);
        self.items = items;
        self
    }
}

/// Order line with the drink attributes resolved at read time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub drink_id: i64,
    pub drink_name: String,
    pub size_ml: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub is_sweet: bool,
    pub quantity: i64,
}

impl OrderItem {
    /// quantity × unit price
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Σ quantity × unit price over all items
pub fn order_total(items: &[OrderItem]) -> Decimal {
    items.iter().map(OrderItem::line_total).sum()
}

/// One requested line of a new order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub drink_id: i64,
    pub quantity: i64,
}

/// Create order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub waiter_name: String,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// Data needed to render the order form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderForm {
    pub drinks: Vec<Drink>,
}

/// A waiter's orders, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaiterOrders {
    pub waiter_name: String,
    pub orders: Vec<Order>,
}

/// One row on a station monitor
///
/// Only carries the items prepared at `station`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationTicket {
    pub order_id: i64,
    pub waiter_name: String,
    pub created_at: i64,
    pub station: Station,
    pub items: Vec<OrderItem>,
}

/// A station's open queue, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationQueue {
    pub station: Station,
    pub tickets: Vec<StationTicket>,
}
