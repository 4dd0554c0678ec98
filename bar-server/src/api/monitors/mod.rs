//! Station monitor routes
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /monitor | GET | Schankwagen 待出品队列 |
//! | /monitor/{id}/done | POST | Schankwagen 出品完成 |
//! | /aperolMonitor | GET | Süßkram 待出品队列 |
//! | /aperolMonitor/{id}/done | POST | Süßkram 出品完成 |
//!
//! Both monitors share one set of handlers, parameterized by [`Station`].

mod handler;

use axum::{
    Router,
    extract::State,
    routing::{get, post},
};
use shared::models::Station;

use crate::api::OrderId;
use crate::core::ServerState;

/// Monitor base path of a station
pub fn monitor_path(station: Station) -> &'static str {
    match station {
        Station::Schankwagen => "/monitor",
        Station::Suesskram => "/aperolMonitor",
    }
}

pub fn router() -> Router<ServerState> {
    Station::ALL
        .into_iter()
        .fold(Router::new(), |router, station| router.merge(station_router(station)))
}

fn station_router(station: Station) -> Router<ServerState> {
    let base = monitor_path(station);
    Router::new()
        .route(
            base,
            get(move |state: State<ServerState>| handler::queue(state, station)),
        )
        .route(
            &format!("{base}/{{id}}/done"),
            post(move |state: State<ServerState>, id: OrderId| {
                handler::mark_done(state, id, station)
            }),
        )
}
