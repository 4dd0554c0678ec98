use sqlx::SqlitePool;

use crate::catalog;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;

/// 服务器状态 - 持有配置和数据库连接池
///
/// 通过 axum `State` 显式传递给每个 handler；克隆成本极低
/// (`SqlitePool` 内部是 Arc)。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试里配合
    /// [`DbService::in_memory`] 使用。
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库 (打开/创建文件，执行迁移)
    /// 2. 饮品目录 (从种子文件替换)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;

        let summary = catalog::seed_from_file(&db.pool, &config.drinks_config).await?;
        tracing::info!(
            offered = summary.offered,
            retired = summary.retired,
            source = %config.drinks_config.display(),
            "Drink catalog seeded"
        );

        Ok(Self::new(config.clone(), db.pool))
    }
}
