//! Schedule API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::{booking, schedule};
use crate::utils::{AppError, AppResult};
use shared::models::{Booking, ScheduleView};

/// Query params for listing schedules
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub route_id: Option<i64>,
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SchedulesResponse {
    pub schedules: Vec<ScheduleView>,
}

/// GET /api/schedules - 班次列表 (按发车时间排序，含座位快照)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<SchedulesResponse>> {
    let default_capacity = state.config.capacity_policy.default_capacity;
    let schedules = schedule::find_snapshots(&state.pool, query.route_id, query.date.as_deref())
        .await?
        .into_iter()
        .map(|s| s.into_view(default_capacity))
        .collect();
    Ok(Json(SchedulesResponse { schedules }))
}

#[derive(Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

/// GET /api/schedules/:id/bookings - 乘客名单 (司机视图，按订座时间排序)
pub async fn list_bookings(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookingsResponse>> {
    schedule::find_snapshot_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Schedule {id} not found")))?;

    let bookings = booking::find_confirmed_by_schedule(&state.pool, id).await?;
    Ok(Json(BookingsResponse { bookings }))
}

/// GET /api/schedules/:id - 单班次座位快照
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ScheduleView>> {
    let snapshot = schedule::find_snapshot_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Schedule {id} not found")))?;
    Ok(Json(
        snapshot.into_view(state.config.capacity_policy.default_capacity),
    ))
}
