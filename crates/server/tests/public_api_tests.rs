//! Visitor information and staff calendar endpoints.

mod common;

use axum::http::StatusCode;
use common::{RecordingDelivery, create_test_resources, create_test_server};
use museum_backend::seed::seed_defaults;
use serde_json::{Value, json};
use std::sync::Arc;

async fn server() -> axum_test::TestServer {
    create_test_server(create_test_resources(Arc::new(RecordingDelivery::default())).await)
}

// =============================================================================
// Static endpoints
// =============================================================================

#[tokio::test]
async fn test_root_message() {
    let response = server().await.get("/api").await;
    response.assert_status_ok();
    response.assert_json(&json!({"message": "Welcome to the High Museum of Art API"}));
}

#[tokio::test]
async fn test_status_payload() {
    let response = server().await.get("/api/status").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "status": "operational",
        "version": "1.0.0",
        "source": "database"
    }));
}

#[tokio::test]
async fn test_api_docs_are_served() {
    let response = server().await.get("/api-docs").await;
    response.assert_status_ok();
}

// =============================================================================
// Public calendar
// =============================================================================

#[tokio::test]
async fn test_empty_calendar() {
    let server = server().await;
    server.get("/api/hours").await.assert_json(&json!({}));
    server.get("/api/holidays").await.assert_json(&json!({}));
    server
        .get("/api/events")
        .await
        .assert_json(&json!({"monthly_events": [{}]}));
}

#[tokio::test]
async fn test_seeded_calendar() {
    let resources = create_test_resources(Arc::new(RecordingDelivery::default())).await;
    seed_defaults(resources.db.as_ref()).await.expect("seed");
    let server = create_test_server(resources);

    let hours: Value = server.get("/api/hours").await.json();
    assert_eq!(hours["Mon"], "Closed");
    assert_eq!(hours["Sun"], "12:00 PM - 5:00 PM");
    assert_eq!(hours.as_object().map(|o| o.len()), Some(7));

    let holidays: Value = server.get("/api/holidays").await.json();
    assert_eq!(holidays["Christmas Day"], "2026-12-25");
    assert_eq!(holidays.as_object().map(|o| o.len()), Some(6));

    let events: Value = server.get("/api/events").await.json();
    let by_date = &events["monthly_events"][0];
    assert_eq!(by_date["2026-01-14"].as_array().map(Vec::len), Some(2));
    assert_eq!(by_date["2026-01-14"][0]["title"], "Conversation Pieces");
    assert_eq!(by_date["2026-01-16"][0]["title"], "Friday Night Jazz");
}

#[tokio::test]
async fn test_events_grouped_by_date() {
    let server = server().await;
    for (title, date) in [("X", "2026-01-14"), ("Y", "2026-01-14"), ("Z", "2026-01-15")] {
        server
            .post("/api/events")
            .json(&json!({"title": title, "date": date}))
            .await
            .assert_status_ok();
    }

    server.get("/api/events").await.assert_json(&json!({
        "monthly_events": [{
            "2026-01-14": [
                {"title": "X", "description": null},
                {"title": "Y", "description": null}
            ],
            "2026-01-15": [{"title": "Z", "description": null}]
        }]
    }));
}

// =============================================================================
// Staff calendar management
// =============================================================================

#[tokio::test]
async fn test_create_and_delete_holiday() {
    let server = server().await;

    let created: Value = server
        .post("/api/holidays")
        .json(&json!({"name": "Museum Day", "date": "2026-05-18"}))
        .await
        .json();
    assert_eq!(created["name"], "Museum Day");
    assert_eq!(created["date"], "2026-05-18");
    let id = created["id"].as_i64().expect("id");

    let listed: Value = server.get("/api/admin/holidays").await.json();
    assert_eq!(listed[0]["id"], id);

    let response = server.delete(&format!("/api/holidays/{id}")).await;
    response.assert_status_ok();
    response.assert_json(&json!({"status": "deleted"}));

    let response = server.delete(&format!("/api/holidays/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"detail": "Holiday not found"}));
}

#[tokio::test]
async fn test_delete_unknown_event() {
    let response = server().await.delete("/api/events/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_json(&json!({"detail": "Event not found"}));
}

#[tokio::test]
async fn test_admin_events_sorted_by_date() {
    let server = server().await;
    for (title, date) in [("Late", "2026-03-01"), ("Early", "2026-01-01"), ("Mid", "2026-02-01")] {
        server
            .post("/api/events")
            .json(&json!({"title": title, "date": date, "description": "d"}))
            .await
            .assert_status_ok();
    }

    let listed: Value = server.get("/api/admin/events").await.json();
    let titles: Vec<&str> = listed
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();
    assert_eq!(titles, ["Early", "Mid", "Late"]);
    assert_eq!(listed[0]["description"], "d");
}

#[tokio::test]
async fn test_invalid_event_date_is_rejected() {
    let server = server().await;
    let response = server
        .post("/api/events")
        .json(&json!({"title": "Bad", "date": "2026-02-30"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let listed: Value = server.get("/api/admin/events").await.json();
    assert_eq!(listed, json!([]));
}
