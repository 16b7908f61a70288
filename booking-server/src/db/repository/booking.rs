//! Booking Repository
//!
//! The only write path of the admission engine lives here.

use super::RepoResult;
use shared::models::Booking;
use sqlx::SqlitePool;

/// Atomic admit-if-under-limit insert.
///
/// Inserts one confirmed booking only when the schedule's current confirmed
/// count is below `limit`, in a single statement. SQLite serializes writers,
/// so the count-and-insert pair cannot interleave with another admission —
/// the confirmed count for a schedule can never exceed the limit this was
/// called with.
///
/// Returns the new booking id, or `None` when the limit blocked the insert.
pub async fn insert_confirmed_if_under(
    pool: &SqlitePool,
    user_id: i64,
    schedule_id: i64,
    stop_id: i64,
    limit: i64,
    created_at: i64,
) -> RepoResult<Option<i64>> {
    let id: Option<i64> = sqlx::query_scalar(
        "INSERT INTO bookings (user_id, schedule_id, stop_id, status, created_at)
         SELECT ?1, ?2, ?3, 'confirmed', ?4
          WHERE (SELECT COUNT(1) FROM bookings
                  WHERE schedule_id = ?2 AND status = 'confirmed') < ?5
         RETURNING id",
    )
    .bind(user_id)
    .bind(schedule_id)
    .bind(stop_id)
    .bind(created_at)
    .bind(limit)
    .fetch_optional(pool)
    .await?;
    Ok(id)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Booking>> {
    let booking = sqlx::query_as::<_, Booking>(
        "SELECT id, user_id, schedule_id, stop_id, status, created_at
           FROM bookings WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(booking)
}

/// Confirmed bookings for a schedule, oldest first (driver manifest order)
pub async fn find_confirmed_by_schedule(
    pool: &SqlitePool,
    schedule_id: i64,
) -> RepoResult<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(
        "SELECT id, user_id, schedule_id, stop_id, status, created_at
           FROM bookings
          WHERE schedule_id = ? AND status = 'confirmed'
          ORDER BY created_at, id",
    )
    .bind(schedule_id)
    .fetch_all(pool)
    .await?;
    Ok(bookings)
}
