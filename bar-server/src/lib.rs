//! Bar Server - 节日酒水点单与出品跟踪
//!
//! # 架构概述
//!
//! 服务员提交订单，饮品按类别分流到两个出品站点：
//!
//! - **Schankwagen** (`/monitor`): 非甜类饮品
//! - **Süßkram** (`/aperolMonitor`): 甜类饮品
//!
//! 每个站点独立标记完成；服务员送达后关闭订单。
//!
//! # 模块结构
//!
//! ```text
//! bar-server/src/
//! ├── core/          # 配置、状态、HTTP 服务
//! ├── api/           # HTTP 路由和处理器
//! ├── catalog.rs     # 饮品目录种子文件
//! ├── orders/        # 下单校验
//! ├── db/            # SQLite 连接池、迁移、仓储
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState, build_router};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ )____ ______
  / __  / __ `/ ___/
 / /_/ / /_/ / /
/_____/\__,_/_/
    "#
    );
}
