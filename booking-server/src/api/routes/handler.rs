//! Route Catalog API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::route;
use crate::utils::{AppError, AppResult};
use shared::models::{Route, Stop};

#[derive(Serialize)]
pub struct StopsResponse {
    pub stops: Vec<Stop>,
}

/// GET /api/routes - 获取所有路线
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Route>>> {
    let routes = route::find_all(&state.pool).await?;
    Ok(Json(routes))
}

/// GET /api/routes/:id/stops - 获取路线站点 (按顺序)
pub async fn list_stops(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<StopsResponse>> {
    route::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Route {id} not found")))?;

    let stops = route::find_stops(&state.pool, id).await?;
    Ok(Json(StopsResponse { stops }))
}
