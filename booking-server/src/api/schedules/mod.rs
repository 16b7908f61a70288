//! Schedule API 模块
//!
//! 班次列表与单班次座位快照，均为只读聚合。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/schedules", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/bookings", get(handler::list_bookings))
}
