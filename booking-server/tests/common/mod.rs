//! Shared test fixtures: temp-file SQLite state + catalog seed data

use booking_server::{Config, ServerState};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Fresh server state over a temp-file database (WAL needs a real file)
pub async fn test_state() -> (TempDir, ServerState) {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("test.db");
    let config = Config::with_overrides(db_path.to_str().expect("utf8 path"), 0);
    let state = ServerState::initialize(&config).await.expect("state init");
    (dir, state)
}

/// Seed the reference catalog:
///
/// - routes: R001 (2 stops), R002 (1 stop)
/// - buses: KA-01 capacity 2, KA-02 capacity 70
/// - schedules: id 1 = R001/KA-01 08:00, id 2 = R001/KA-02 07:30,
///   id 3 = R002/KA-02 09:00 (next day)
pub async fn seed_catalog(pool: &SqlitePool) {
    let statements = [
        "INSERT INTO routes (code, display_name) VALUES ('R001', 'Route 1 - Campus to Downtown')",
        "INSERT INTO routes (code, display_name) VALUES ('R002', 'Route 2 - Campus to Airport')",
        "INSERT INTO stops (route_id, name, seq) VALUES (1, 'Main Gate', 1)",
        "INSERT INTO stops (route_id, name, seq) VALUES (1, 'Library', 2)",
        "INSERT INTO stops (route_id, name, seq) VALUES (2, 'Main Gate', 1)",
        "INSERT INTO buses (bus_number, capacity) VALUES ('KA-01', 2)",
        "INSERT INTO buses (bus_number, capacity) VALUES ('KA-02', 70)",
        "INSERT INTO schedules (route_id, date, bus_id, departure_time, status)
         VALUES (1, '2026-09-01', 1, '08:00', 'active')",
        "INSERT INTO schedules (route_id, date, bus_id, departure_time, status)
         VALUES (1, '2026-09-01', 2, '07:30', 'active')",
        "INSERT INTO schedules (route_id, date, bus_id, departure_time, status)
         VALUES (2, '2026-09-02', 2, '09:00', 'active')",
    ];
    for sql in statements {
        sqlx::query(sql).execute(pool).await.expect("seed");
    }
}
