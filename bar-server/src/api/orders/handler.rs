//! Order API Handlers

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::api::{OrderId, order_error, see_other};
use crate::core::ServerState;
use crate::db::repository::{drink, order};
use crate::orders;
use crate::utils::{ApiResponse, AppResult};
use shared::models::{OrderForm, WaiterOrders};

use super::OrderSubmission;

/// Waiter list location for a (possibly non-ASCII) name
fn waiter_location(waiter_name: &str) -> String {
    format!("/orders/{}", urlencoding::encode(waiter_name))
}

/// GET / - 点单表单 (在售饮品，按名称排序)
pub async fn order_form(State(state): State<ServerState>) -> AppResult<ApiResponse<OrderForm>> {
    let drinks = drink::find_active(&state.pool).await?;
    Ok(ApiResponse::success(OrderForm { drinks }))
}

/// POST / - 下单，成功后 303 跳转到该服务员的订单列表
pub async fn create(
    State(state): State<ServerState>,
    OrderSubmission(payload): OrderSubmission,
) -> AppResult<Response> {
    let created = orders::submit(&state.pool, payload).await?;
    let location = waiter_location(&created.waiter_name);
    let notice = format!("Order #{} recorded", created.id);
    Ok(see_other(location, ApiResponse::success_with_message(notice, created)))
}

/// GET /orders/{waiter_name} - 服务员订单 (最新在前)
pub async fn list_for_waiter(
    State(state): State<ServerState>,
    Path(waiter_name): Path<String>,
) -> AppResult<ApiResponse<WaiterOrders>> {
    let orders = order::find_by_waiter(&state.pool, &waiter_name).await?;
    Ok(ApiResponse::success(WaiterOrders {
        waiter_name,
        orders,
    }))
}

/// POST /orders/{id}/close - 服务员确认已送达 (幂等)
pub async fn close(
    State(state): State<ServerState>,
    OrderId(id): OrderId,
) -> AppResult<Response> {
    let closed = order::mark_delivered(&state.pool, id)
        .await
        .map_err(order_error(id))?;

    tracing::info!(order_id = id, waiter = %closed.waiter_name, "Order delivered");

    let location = waiter_location(&closed.waiter_name);
    let notice = format!("Order #{id} closed");
    Ok(see_other(location, ApiResponse::success_with_message(notice, closed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiter_location_is_encoded() {
        assert_eq!(waiter_location("Anna"), "/orders/Anna");
        assert_eq!(waiter_location("Anna Lena"), "/orders/Anna%20Lena");
        assert_eq!(waiter_location("Jürgen"), "/orders/J%C3%BCrgen");
        assert_eq!(waiter_location("a/b"), "/orders/a%2Fb");
    }
}
