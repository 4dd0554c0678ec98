//! Station monitor handlers

use axum::{extract::State, response::Response};
use shared::models::{Station, StationQueue};

use super::monitor_path;
use crate::api::{OrderId, order_error, see_other};
use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{ApiResponse, AppResult};

/// GET <monitor> - 该站点未完成的订单 (最早在前，只含本站饮品)
pub async fn queue(
    State(state): State<ServerState>,
    station: Station,
) -> AppResult<ApiResponse<StationQueue>> {
    let tickets = order::find_open_for_station(&state.pool, station).await?;
    Ok(ApiResponse::success(StationQueue { station, tickets }))
}

/// POST <monitor>/{id}/done - 设置本站完成标记 (幂等，不影响另一站点)
pub async fn mark_done(
    State(state): State<ServerState>,
    OrderId(id): OrderId,
    station: Station,
) -> AppResult<Response> {
    let updated = order::mark_station_done(&state.pool, id, station)
        .await
        .map_err(order_error(id))?;

    tracing::info!(order_id = id, station = %station, "Station marked order done");

    let notice = format!("Order #{id} done");
    Ok(see_other(
        monitor_path(station).to_string(),
        ApiResponse::success_with_message(notice, updated),
    ))
}
