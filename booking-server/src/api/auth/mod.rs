//! Auth API 模块
//!
//! 明文凭据查询 — 身份安全属于外部协作方，这里只做数据访问。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/register", post(handler::register))
}
