use crate::admission::CapacityPolicy;

/// 服务器配置 - 订座服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | campus_bus.db | SQLite 数据库路径 |
/// | DEFAULT_BUS_CAPACITY | 70 | 车辆容量未知时的兜底座位数 |
/// | OVERBOOK_ALLOWANCE | 5 | 软超订允许超出的座位数 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/campus_bus.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库路径
    pub database_path: String,
    /// 容量策略 (兜底容量 + 软超订余量)
    pub capacity_policy: CapacityPolicy,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "campus_bus.db".into()),
            capacity_policy: CapacityPolicy {
                default_capacity: std::env::var("DEFAULT_BUS_CAPACITY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(CapacityPolicy::DEFAULT_CAPACITY),
                overbook_allowance: std::env::var("OVERBOOK_ALLOWANCE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(CapacityPolicy::DEFAULT_OVERBOOK_ALLOWANCE),
            },
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
