//! Schedule Model
//!
//! A schedule is one bus departure instance (route + date + time + assigned
//! bus). The occupancy snapshot joins the assigned bus and the live count of
//! confirmed bookings — the count is always derived from the booking set,
//! never a stored counter.

use serde::{Deserialize, Serialize};

/// Occupancy snapshot row (schedule + bus + confirmed-booking count)
///
/// `capacity`/`bus_number` are `Option` because the bus join is a LEFT JOIN:
/// a schedule without a resolvable bus still admits with a default capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ScheduleSnapshot {
    pub id: i64,
    pub route_id: i64,
    pub date: String,
    pub bus_id: Option<i64>,
    pub departure_time: String,
    pub status: String,
    pub bus_number: Option<String>,
    pub capacity: Option<i64>,
    pub booked_count: i64,
}

impl ScheduleSnapshot {
    /// Derive the wire view, filling the capacity default and computing
    /// `soft_overbook = booked_count > capacity`.
    pub fn into_view(self, default_capacity: i64) -> ScheduleView {
        let capacity = self.capacity.unwrap_or(default_capacity);
        ScheduleView {
            id: self.id,
            route_id: self.route_id,
            date: self.date,
            bus_id: self.bus_id,
            departure_time: self.departure_time,
            status: self.status,
            bus_number: self.bus_number,
            capacity,
            soft_overbook: self.booked_count > capacity,
            booked_count: self.booked_count,
        }
    }
}

/// Schedule snapshot as served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleView {
    pub id: i64,
    pub route_id: i64,
    pub date: String,
    pub bus_id: Option<i64>,
    pub departure_time: String,
    pub status: String,
    pub bus_number: Option<String>,
    pub capacity: i64,
    pub booked_count: i64,
    /// Confirmed bookings exceed nominal capacity (within the soft limit)
    pub soft_overbook: bool,
}
