//! Order Repository
//!
//! Orders and their items. Drink attributes are joined at read time, so
//! totals and station routing always reflect the current catalog.

use std::collections::HashMap;

use super::drink::cents_to_price;
use super::{RepoError, RepoResult};
use shared::models::{Order, OrderItem, OrderLine, Station, StationTicket};
use shared::util::now_millis;
use sqlx::{SqliteConnection, SqlitePool};

const ORDER_COLUMNS: &str = "o.id AS id, o.waiter_name AS waiter_name, o.created_at AS created_at, \
     o.schankwagen_done AS schankwagen_done, o.suesskram_done AS suesskram_done, \
     o.delivered AS delivered";

const ITEM_SELECT: &str = "SELECT i.id AS id, i.order_id AS order_id, i.drink_id AS drink_id, \
     d.name AS drink_name, d.size_ml AS size_ml, d.price_cents AS price_cents, \
     d.is_sweet AS is_sweet, i.quantity AS quantity \
     FROM order_item i \
     JOIN drink d ON d.id = i.drink_id \
     JOIN orders o ON o.id = i.order_id";

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    order_id: i64,
    drink_id: i64,
    drink_name: String,
    size_ml: i64,
    price_cents: i64,
    is_sweet: bool,
    quantity: i64,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            id: row.id,
            order_id: row.order_id,
            drink_id: row.drink_id,
            drink_name: row.drink_name,
            size_ml: row.size_ml,
            unit_price: cents_to_price(row.price_cents),
            is_sweet: row.is_sweet,
            quantity: row.quantity,
        }
    }
}

/// Completion column owned by a station
fn done_column(station: Station) -> &'static str {
    match station {
        Station::Schankwagen => "schankwagen_done",
        Station::Suesskram => "suesskram_done",
    }
}

fn group_items(rows: Vec<OrderItemRow>) -> HashMap<i64, Vec<OrderItem>> {
    let mut grouped: HashMap<i64, Vec<OrderItem>> = HashMap::new();
    for row in rows {
        grouped.entry(row.order_id).or_default().push(row.into());
    }
    grouped
}

async fn load_items(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let rows = sqlx::query_as::<_, OrderItemRow>(&format!(
        "{ITEM_SELECT} WHERE i.order_id = ? ORDER BY i.id"
    ))
    .bind(order_id)
    .fetch_all(conn)
    .await?;
    Ok(rows.into_iter().map(OrderItem::from).collect())
}

/// Insert an order with one item per line in a single transaction
///
/// Lines must already be validated (positive quantities, active drinks).
pub async fn create(pool: &SqlitePool, waiter_name: &str, lines: &[OrderLine]) -> RepoResult<Order> {
    if lines.is_empty() {
        return Err(RepoError::Validation("Order must contain at least one item".into()));
    }

    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (waiter_name, created_at) VALUES (?, ?) RETURNING id",
    )
    .bind(waiter_name)
    .bind(now_millis())
    .fetch_one(&mut *tx)
    .await?;

    for line in lines {
        sqlx::query("INSERT INTO order_item (order_id, drink_id, quantity) VALUES (?, ?, ?)")
            .bind(id)
            .bind(line.drink_id)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Order {id} missing after insert")))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let mut conn = pool.acquire().await?;

    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders o WHERE o.id = ?"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    match order {
        Some(order) => {
            let items = load_items(&mut conn, id).await?;
            Ok(Some(order.with_items(items)))
        }
        None => Ok(None),
    }
}

/// A waiter's orders, newest first, with items and totals
///
/// Exact match on the name: "anna" and "Anna" are different waiters.
pub async fn find_by_waiter(pool: &SqlitePool, waiter_name: &str) -> RepoResult<Vec<Order>> {
    let mut tx = pool.begin().await?;

    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders o WHERE o.waiter_name = ? \
         ORDER BY o.created_at DESC, o.id DESC"
    ))
    .bind(waiter_name)
    .fetch_all(&mut *tx)
    .await?;

    let rows = sqlx::query_as::<_, OrderItemRow>(&format!(
        "{ITEM_SELECT} WHERE o.waiter_name = ? ORDER BY i.id"
    ))
    .bind(waiter_name)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    let mut items = group_items(rows);
    Ok(orders
        .into_iter()
        .map(|order| {
            let order_items = items.remove(&order.id).unwrap_or_default();
            order.with_items(order_items)
        })
        .collect())
}

/// Open queue of a station, oldest first
///
/// An order is listed while the station's flag is unset and at least one of
/// its items is a drink the station prepares ([`Station::serves`]). Tickets
/// only carry those items.
pub async fn find_open_for_station(
    pool: &SqlitePool,
    station: Station,
) -> RepoResult<Vec<StationTicket>> {
    let done = done_column(station);

    let mut tx = pool.begin().await?;

    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders o WHERE o.{done} = 0 \
         ORDER BY o.created_at ASC, o.id ASC"
    ))
    .fetch_all(&mut *tx)
    .await?;

    let rows = sqlx::query_as::<_, OrderItemRow>(&format!(
        "{ITEM_SELECT} WHERE o.{done} = 0 ORDER BY i.id"
    ))
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    let routed: Vec<OrderItemRow> = rows
        .into_iter().filter(|row| station.serves(row.is_sweet)).collect();
    let mut items = group_items(routed);
    Ok(orders
        .into_iter()
        .filter_map(|order| {
            let ticket_items = items.remove(&order.id)?;
            Some(StationTicket {
                items: ticket_items,
                order_id: order.id,
                waiter_name: order.waiter_name,
                created_at: order.created_at,
                station,
            })
        })
        .collect())
}

/// Set the waiter-facing completion flag (idempotent)
pub async fn mark_delivered(pool: &SqlitePool, id: i64) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE orders SET delivered = 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Set a station's completion flag (idempotent, never cleared)
pub async fn mark_station_done(pool: &SqlitePool, id: i64, station: Station) -> RepoResult<Order> {
    let done = done_column(station);
    let rows = sqlx::query(&format!("UPDATE orders SET {done} = 1 WHERE id = ?"))
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}
