//! Booking Model

use serde::{Deserialize, Serialize};

/// Booking status — `confirmed` is the only status the admission engine
/// creates; it is the status that counts toward occupancy.
pub const BOOKING_STATUS_CONFIRMED: &str = "confirmed";

/// Booking entity (订座记录)
///
/// Created exactly once per successful admission, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub schedule_id: i64,
    pub stop_id: i64,
    pub status: String,
    /// Creation time, unix millis
    pub created_at: i64,
}

/// Create booking payload
///
/// `schedule_id`/`stop_id` are `Option` so that a missing field is a
/// validation error reported by the handler rather than a deserialize 422.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub schedule_id: Option<i64>,
    pub stop_id: Option<i64>,
    /// Caller-asserted identity; the `x-user-id` header takes precedence
    pub user_id: Option<i64>,
    /// Accept soft overbooking up to the soft limit
    #[serde(default)]
    pub auto_book: bool,
}
