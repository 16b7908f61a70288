use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有配置和数据库连接池
///
/// ServerState 是订座服务的核心数据结构。连接池在进程启动时创建一次，
/// 随 State 注入到每个 handler；进程退出时随 pool drop 关闭。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
}

impl ServerState {
    /// 初始化服务器状态：打开数据库并应用迁移
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }

    /// 数据库是否可达 (健康检查)
    pub async fn database_ok(&self) -> bool {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
