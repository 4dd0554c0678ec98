//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`orders`] - 点单表单、下单、服务员订单列表
//! - [`monitors`] - Schankwagen / Süßkram 出品监视器

pub mod health;
pub mod monitors;
pub mod orders;

use axum::Router;
use axum::extract::{FromRequestParts, Path};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::utils::{ApiResponse, AppError};

/// Assemble all routers (state is applied by the caller)
pub fn build_app() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(monitors::router())
}

/// `303 See Other` with the notice in the body
///
/// Clients follow the `Location` with a GET and show `message` there.
pub(crate) fn see_other<T: Serialize>(location: String, body: ApiResponse<T>) -> Response {
    (
        StatusCode::SEE_OTHER,
        [(http::header::LOCATION, location)],
        axum::Json(body),
    )
        .into_response()
}

/// Order id taken from the single path parameter
///
/// Rejects non-numeric ids with the JSON `InvalidRequest` envelope.
#[derive(Debug, Clone, Copy)]
pub struct OrderId(pub i64);

impl<S> FromRequestParts<S> for OrderId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        Ok(Self(id))
    }
}

/// Map a repository miss on an order id to `OrderNotFound`
pub(crate) fn order_error(id: i64) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound(_) => AppError::order_not_found(id),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::post;
    use http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn id_router() -> Router {
        Router::new().route(
            "/orders/{key}/close",
            post(|OrderId(id): OrderId| async move { id.to_string() }),
        )
    }

    async fn call(uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::post(uri).body(Body::empty()).unwrap();
        let response = id_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn test_order_id_accepts_numbers() {
        let (status, body) = call("/orders/7/close").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!(7));
    }

    #[tokio::test]
    async fn test_order_id_rejects_text_as_json() {
        let (status, body) = call("/orders/abc/close").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 5);
        assert!(!body["message"].as_str().unwrap().is_empty());
    }
}
