//! HTTP API integration tests
//!
//! Drives the full router (middleware included) with tower oneshot calls,
//! covering the admission decision table end to end plus the catalog,
//! stats, and auth endpoints.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use booking_server::api;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{seed_catalog, test_state};

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

async fn test_app() -> (tempfile::TempDir, Router) {
    let (dir, state) = test_state().await;
    seed_catalog(&state.pool).await;
    (dir, api::build_app(state))
}

#[tokio::test]
async fn health_reports_ok() {
    let (_dir, app) = test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn routes_and_stops_catalog() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(&app, "/api/routes").await;
    assert_eq!(status, StatusCode::OK);
    let routes = body.as_array().expect("array");
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["code"], "R001");

    let (status, body) = get(&app, "/api/routes/1/stops").await;
    assert_eq!(status, StatusCode::OK);
    let stops = body["stops"].as_array().expect("stops");
    assert_eq!(stops.len(), 2);
    // Ordered by sequence position
    assert_eq!(stops[0]["name"], "Main Gate");
    assert_eq!(stops[1]["name"], "Library");

    let (status, _) = get(&app, "/api/routes/99/stops").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn schedule_listing_is_filtered_and_ordered_by_departure() {
    let (_dir, app) = test_app().await;

    let (status, body) = get(&app, "/api/schedules?routeId=1&date=2026-09-01").await;
    assert_eq!(status, StatusCode::OK);
    let schedules = body["schedules"].as_array().expect("schedules");
    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[0]["departure_time"], "07:30");
    assert_eq!(schedules[1]["departure_time"], "08:00");
    assert_eq!(schedules[0]["booked_count"], 0);
    assert_eq!(schedules[0]["soft_overbook"], false);
}

#[tokio::test]
async fn booking_requires_schedule_and_stop() {
    let (_dir, app) = test_app().await;
    let (status, body) = post(&app, "/api/bookings", json!({ "scheduleId": 1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "scheduleId and stopId are required");
}

#[tokio::test]
async fn booking_unknown_schedule_is_not_found() {
    let (_dir, app) = test_app().await;
    let (status, _) = post(
        &app,
        "/api/bookings",
        json!({ "scheduleId": 999, "stopId": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_admission_walks_the_decision_table() {
    // Schedule 1 runs bus KA-01 with capacity 2 (soft limit 7)
    let (_dir, app) = test_app().await;
    let body = json!({ "scheduleId": 1, "stopId": 1 });

    // Two seats admit outright
    for expected_count in 1..=2 {
        let (status, response) = post(&app, "/api/bookings", body.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response["message"], "Booking confirmed");
        assert_eq!(response["schedule"]["booked_count"], expected_count);
        assert_eq!(response["schedule"]["soft_overbook"], false);
    }

    // Hard limit reached: rejected without the override, no row written
    let (status, response) = post(&app, "/api/bookings", body.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        response["message"],
        "Bus full. Enable autoBook to soft-overbook."
    );

    // The override soft-overbooks up to capacity + 5
    let overbook = json!({ "scheduleId": 1, "stopId": 1, "autoBook": true });
    for expected_count in 3..=7 {
        let (status, response) = post(&app, "/api/bookings", overbook.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response["schedule"]["booked_count"], expected_count);
        assert_eq!(response["schedule"]["soft_overbook"], true);
    }

    // Soft limit is final, override or not
    let (status, response) = post(&app, "/api/bookings", overbook.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["message"], "Bus soft-overbook limit reached.");

    // The snapshot still reflects exactly the committed bookings
    let (_, snapshot) = get(&app, "/api/schedules/1").await;
    assert_eq!(snapshot["booked_count"], 7);
    assert_eq!(snapshot["soft_overbook"], true);
}

#[tokio::test]
async fn booking_honors_user_id_header() {
    let (dir, state) = test_state().await;
    seed_catalog(&state.pool).await;
    let pool = state.pool.clone();
    let app = api::build_app(state);
    let _dir = dir;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/bookings")
                .header("content-type", "application/json")
                .header("x-user-id", "42")
                .body(Body::from(
                    json!({ "scheduleId": 2, "stopId": 1 }).to_string(),
                ))
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);

    let user_id: i64 =
        sqlx::query_scalar("SELECT user_id FROM bookings ORDER BY id DESC LIMIT 1")
            .fetch_one(&pool)
            .await
            .expect("query");
    assert_eq!(user_id, 42);
}

#[tokio::test]
async fn passenger_manifest_lists_confirmed_bookings_in_order() {
    let (_dir, app) = test_app().await;

    for user_id in [7, 8] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings")
                    .header("content-type", "application/json")
                    .header("x-user-id", user_id.to_string())
                    .body(Body::from(
                        json!({ "scheduleId": 2, "stopId": 1 }).to_string(),
                    ))
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/schedules/2/bookings").await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body["bookings"].as_array().expect("bookings");
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0]["user_id"], 7);
    assert_eq!(bookings[1]["user_id"], 8);
    assert_eq!(bookings[0]["status"], "confirmed");

    let (status, _) = get(&app, "/api/schedules/999/bookings").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn register_then_login_roundtrip() {
    let (_dir, app) = test_app().await;
    let user = json!({
        "name": "Asha",
        "email": "asha@campus.edu",
        "role": "student",
        "password": "secret"
    });

    let (status, body) = post(&app, "/api/auth/register", user.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "asha@campus.edu");
    assert!(body["user"].get("password").is_none());

    // Duplicate email conflicts
    let (status, _) = post(&app, "/api/auth/register", user).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = post(
        &app,
        "/api/auth/login",
        json!({ "email": "asha@campus.edu", "password": "secret" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "student");

    let (status, _) = post(
        &app,
        "/api/auth/login",
        json!({ "email": "asha@campus.edu", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn route_utilization_aggregates_confirmed_bookings() {
    let (_dir, app) = test_app().await;

    // 3 confirmed bookings on route 1
    for _ in 0..3 {
        let (status, _) = post(
            &app,
            "/api/bookings",
            json!({ "scheduleId": 2, "stopId": 1 }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/stats/route-utilization?date=2026-09-01").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["utilization"].as_array().expect("rows");

    let route1 = rows
        .iter()
        .find(|r| r["code"] == "R001")
        .expect("route 1 row");
    assert_eq!(route1["num_buses"], 2);
    assert_eq!(route1["total_capacity"], 72);
    assert_eq!(route1["total_booked"], 3);
    // Well under half the default capacity
    assert_eq!(route1["removable_buses"], 1);
}
