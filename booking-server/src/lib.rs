//! Campus Bus Booking Server - 校园巴士订座服务
//!
//! # 架构概述
//!
//! 学生在班次上订座，管理员查看路线利用率，司机查看乘客名单。
//! 核心是订座准入引擎：容量策略 + 原子条件插入，保证单班次确认订座
//! 永不超过软超订上限。
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── admission/     # 订座准入引擎 (策略 + 原子写入)
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (SQLite + 仓储)
//! └── utils/         # 错误、日志、校验
//! ```

pub mod admission;
pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use admission::{AdmissionDecision, AdmissionError, AdmissionRequest, CapacityPolicy};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ____                                ____
  / ___|__ _ _ __ ___  _ __  _   _ ___| __ ) _   _ ___
 | |   / _` | '_ ` _ \| '_ \| | | / __|  _ \| | | / __|
 | |__| (_| | | | | | | |_) | |_| \__ \ |_) | |_| \__ \
  \____\__,_|_| |_| |_| .__/ \__,_|___/____/ \__,_|___/
                      |_|
"#
    );
}
