//! Route Utilization Repository
//!
//! Admin-dashboard aggregation: per route, how many buses are scheduled,
//! their summed capacity, and the summed confirmed bookings.

use super::RepoResult;
use shared::models::RouteUtilizationRow;
use sqlx::SqlitePool;

pub async fn route_utilization(
    pool: &SqlitePool,
    date: Option<&str>,
) -> RepoResult<Vec<RouteUtilizationRow>> {
    let rows = sqlx::query_as::<_, RouteUtilizationRow>(
        "SELECT r.id AS route_id, r.code, r.display_name,
                COUNT(DISTINCT s.id) AS num_buses,
                COALESCE(SUM(b.capacity), 0) AS total_capacity,
                COALESCE(SUM((SELECT COUNT(1) FROM bookings bk
                               WHERE bk.schedule_id = s.id
                                 AND bk.status = 'confirmed')), 0) AS total_booked
           FROM routes r
           LEFT JOIN schedules s ON s.route_id = r.id AND (?1 IS NULL OR s.date = ?1)
           LEFT JOIN buses b ON b.id = s.bus_id
          GROUP BY r.id, r.code, r.display_name
          ORDER BY r.display_name",
    )
    .bind(date)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
