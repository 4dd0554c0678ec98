//! 统一错误处理
//!
//! Re-exports the unified error types from `shared::error` so handlers only
//! import from `crate::utils`.
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::order_not_found(id))
//!
//! // 返回成功响应
//! Ok(ApiResponse::success(data))
//! ```

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
