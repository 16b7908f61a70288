//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 登录 / 注册
//! - [`routes`] - 路线与站点目录
//! - [`schedules`] - 班次与座位快照
//! - [`bookings`] - 订座准入
//! - [`stats`] - 路线利用率统计

pub mod auth;
pub mod bookings;
pub mod health;
pub mod routes;
pub mod schedules;
pub mod stats;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(routes::router())
        .merge(schedules::router())
        .merge(bookings::router())
        .merge(stats::router())
}

/// Build a fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - Handle cross-origin requests (frontend runs on another origin)
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
