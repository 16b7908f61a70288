//! Booking API 模块
//!
//! 订座准入入口 — 容量判定与写入由 [`crate::admission`] 完成。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create))
}
