//! Booking API Handlers

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Serialize;

use crate::admission::{self, AdmissionRequest};
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::models::{BookingCreate, ScheduleView};

/// Identity assumed when the caller asserts none
const FALLBACK_USER_ID: i64 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: i64,
    pub message: String,
    pub schedule: ScheduleView,
}

/// Caller-asserted identity: `x-user-id` header first, then the body field.
/// Existence is not verified — identity belongs to the auth collaborator.
fn resolve_user_id(headers: &HeaderMap, payload: &BookingCreate) -> i64 {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .or(payload.user_id)
        .unwrap_or(FALLBACK_USER_ID)
}

/// POST /api/bookings - 订座 (容量准入)
pub async fn create(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(payload): Json<BookingCreate>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    let (Some(schedule_id), Some(stop_id)) = (payload.schedule_id, payload.stop_id) else {
        return Err(AppError::validation("scheduleId and stopId are required"));
    };

    let request = AdmissionRequest {
        schedule_id,
        stop_id,
        user_id: resolve_user_id(&headers, &payload),
        auto_book: payload.auto_book,
    };

    let outcome = admission::create_booking(&state.pool, &state.config.capacity_policy, request)
        .await
        .map_err(AppError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            booking_id: outcome.booking_id,
            message: "Booking confirmed".to_string(),
            schedule: outcome.schedule,
        }),
    ))
}
