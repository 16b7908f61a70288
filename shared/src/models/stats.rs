//! Route Utilization Stats

use serde::{Deserialize, Serialize};

/// Per-route utilization aggregate row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RouteUtilizationRow {
    pub route_id: i64,
    pub code: String,
    pub display_name: String,
    /// Distinct schedules on the route (for the date filter, if any)
    pub num_buses: i64,
    pub total_capacity: i64,
    pub total_booked: i64,
}

/// Utilization row as served, with the consolidation hint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteUtilization {
    pub route_id: i64,
    pub code: String,
    pub display_name: String,
    pub num_buses: i64,
    pub total_capacity: i64,
    pub total_booked: i64,
    /// 1 when the route is quiet enough that a bus could be pulled
    pub removable_buses: i64,
}

impl RouteUtilizationRow {
    /// A route with fewer confirmed bookings than the threshold can spare a bus.
    pub fn into_view(self, removable_threshold: i64) -> RouteUtilization {
        let removable_buses = if self.total_booked < removable_threshold {
            1
        } else {
            0
        };
        RouteUtilization {
            route_id: self.route_id,
            code: self.code,
            display_name: self.display_name,
            num_buses: self.num_buses,
            total_capacity: self.total_capacity,
            total_booked: self.total_booked,
            removable_buses,
        }
    }
}
