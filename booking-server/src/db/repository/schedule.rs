//! Schedule Repository
//!
//! Occupancy snapshots: schedule + assigned bus + live confirmed-booking
//! count. The count is a correlated subquery over `bookings`, so a snapshot
//! always reflects every committed booking — there is no cached counter to
//! drift.

use super::RepoResult;
use shared::models::ScheduleSnapshot;
use sqlx::SqlitePool;

const SNAPSHOT_SELECT: &str = "\
SELECT s.id, s.route_id, s.date, s.bus_id, s.departure_time, s.status,
       b.bus_number, b.capacity,
       (SELECT COUNT(1) FROM bookings bk
         WHERE bk.schedule_id = s.id AND bk.status = 'confirmed') AS booked_count
  FROM schedules s
  LEFT JOIN buses b ON b.id = s.bus_id";

/// Snapshot for one schedule
pub async fn find_snapshot_by_id(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<ScheduleSnapshot>> {
    let sql = format!("{SNAPSHOT_SELECT} WHERE s.id = ?");
    let snapshot = sqlx::query_as::<_, ScheduleSnapshot>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(snapshot)
}

/// Snapshot listing with optional route/date filters, ordered by departure time
pub async fn find_snapshots(
    pool: &SqlitePool,
    route_id: Option<i64>,
    date: Option<&str>,
) -> RepoResult<Vec<ScheduleSnapshot>> {
    // Both filters are optional; "? IS NULL OR ..." keeps the statement static
    let sql = format!(
        "{SNAPSHOT_SELECT}
  WHERE (?1 IS NULL OR s.route_id = ?1)
    AND (?2 IS NULL OR s.date = ?2)
  ORDER BY s.departure_time"
    );
    let snapshots = sqlx::query_as::<_, ScheduleSnapshot>(&sql)
        .bind(route_id)
        .bind(date)
        .fetch_all(pool)
        .await?;
    Ok(snapshots)
}

/// Live count of confirmed bookings for a schedule
pub async fn confirmed_count(pool: &SqlitePool, schedule_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(1) FROM bookings WHERE schedule_id = ? AND status = 'confirmed'",
    )
    .bind(schedule_id)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
