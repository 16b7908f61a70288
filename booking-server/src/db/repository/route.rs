//! Route Repository

use super::RepoResult;
use shared::models::{Route, Stop};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Route>> {
    let routes = sqlx::query_as::<_, Route>(
        "SELECT id, code, display_name FROM routes ORDER BY code",
    )
    .fetch_all(pool)
    .await?;
    Ok(routes)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Route>> {
    let route =
        sqlx::query_as::<_, Route>("SELECT id, code, display_name FROM routes WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(route)
}

/// Stops along a route, ordered by sequence position
pub async fn find_stops(pool: &SqlitePool, route_id: i64) -> RepoResult<Vec<Stop>> {
    let stops = sqlx::query_as::<_, Stop>(
        "SELECT id, route_id, name, seq FROM stops WHERE route_id = ? ORDER BY seq",
    )
    .bind(route_id)
    .fetch_all(pool)
    .await?;
    Ok(stops)
}
