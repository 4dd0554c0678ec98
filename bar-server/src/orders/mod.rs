//! 订单模块
//!
//! - [`intake`] - 新订单校验与持久化
//!
//! 查询和状态标记直接走 `db::repository::order`。

pub mod intake;

pub use intake::{NewOrder, normalize, submit};
