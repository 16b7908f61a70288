//! Booking Admission Engine
//!
//! Sits between an inbound booking request and the booking store:
//! load the occupancy snapshot, enforce the capacity policy, persist exactly
//! one confirmed booking on admit, and return the refreshed snapshot.
//!
//! The capacity guard is NOT check-then-act: the limit comparison and the
//! insert happen in one atomic statement
//! ([`repository::booking::insert_confirmed_if_under`]), so concurrent
//! requests for the same schedule can never push the confirmed count past
//! the limit. The pre-read snapshot only resolves the schedule and its
//! capacity; the post-failure re-read only classifies the rejection message.

use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

use crate::admission::policy::{AdmissionDecision, CapacityPolicy};
use crate::db::repository::{self, RepoError};
use crate::utils::AppError;
use shared::models::ScheduleView;

/// Rejection message when the hard limit is reached without the override
pub const MSG_BUS_FULL: &str = "Bus full. Enable autoBook to soft-overbook.";
/// Rejection message when the soft-overbook allowance is exhausted
pub const MSG_OVERBOOK_LIMIT: &str = "Bus soft-overbook limit reached.";

/// One admission request, identifiers already parsed
#[derive(Debug, Clone, Copy)]
pub struct AdmissionRequest {
    pub schedule_id: i64,
    pub stop_id: i64,
    /// Caller-asserted identity; not validated against the user table
    pub user_id: i64,
    pub auto_book: bool,
}

/// Successful admission: the new booking and the post-insert snapshot
#[derive(Debug, Clone)]
pub struct AdmissionOutcome {
    pub booking_id: i64,
    pub schedule: ScheduleView,
}

/// Admission failures, including the two capacity rejections — these are
/// expected business outcomes, not system faults.
#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error("Schedule not found")]
    ScheduleNotFound,

    #[error("{MSG_BUS_FULL}")]
    Full,

    #[error("{MSG_OVERBOOK_LIMIT}")]
    OverbookLimit,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        match err {
            AdmissionError::ScheduleNotFound => AppError::not_found("Schedule not found"),
            AdmissionError::Full => AppError::conflict(MSG_BUS_FULL),
            AdmissionError::OverbookLimit => AppError::conflict(MSG_OVERBOOK_LIMIT),
            AdmissionError::Repo(e) => AppError::from(e),
        }
    }
}

/// Admit a booking request against a schedule.
///
/// Sequence: resolve schedule → atomic admit-if-under-limit insert →
/// re-read snapshot. On rejection nothing is written; on storage failure the
/// single-statement insert either fully commits or not at all, so no partial
/// booking is ever visible.
pub async fn create_booking(
    pool: &SqlitePool,
    policy: &CapacityPolicy,
    request: AdmissionRequest,
) -> Result<AdmissionOutcome, AdmissionError> {
    let snapshot = repository::schedule::find_snapshot_by_id(pool, request.schedule_id)
        .await?
        .ok_or(AdmissionError::ScheduleNotFound)?;

    let capacity = policy.effective_capacity(snapshot.capacity);
    let limit = policy.admission_limit(capacity, request.auto_book);

    debug!(
        schedule_id = request.schedule_id,
        booked_count = snapshot.booked_count,
        capacity,
        limit,
        auto_book = request.auto_book,
        "Evaluating admission"
    );

    let booking_id = repository::booking::insert_confirmed_if_under(
        pool,
        request.user_id,
        request.schedule_id,
        request.stop_id,
        limit,
        Utc::now().timestamp_millis(),
    )
    .await?;

    let Some(booking_id) = booking_id else {
        // The guard blocked the insert; re-read the count once to tell the
        // caller which limit was hit.
        let booked_count =
            repository::schedule::confirmed_count(pool, request.schedule_id).await?;
        return Err(
            match policy.decide(booked_count, capacity, request.auto_book) {
                AdmissionDecision::RejectOverbookLimit => AdmissionError::OverbookLimit,
                _ => AdmissionError::Full,
            },
        );
    };

    // Post-insert snapshot so the caller can render availability without a
    // second round trip
    let updated = repository::schedule::find_snapshot_by_id(pool, request.schedule_id)
        .await?
        .ok_or(AdmissionError::ScheduleNotFound)?;

    info!(
        booking_id,
        schedule_id = request.schedule_id,
        user_id = request.user_id,
        booked_count = updated.booked_count,
        "Booking confirmed"
    );

    Ok(AdmissionOutcome {
        booking_id,
        schedule: updated.into_view(policy.default_capacity),
    })
}
