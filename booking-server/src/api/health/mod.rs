//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 健康检查 (含数据库探测) | 无 |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (ok | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 数据库是否可达
    database: &'static str,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_ok = state.database_ok().await;
    Json(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if db_ok { "ok" } else { "error" },
    })
}
