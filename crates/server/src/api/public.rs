//! Unauthenticated visitor information.

use crate::AppResources;
use crate::entity::{event, holiday, operating_hour};
use crate::error::ApiError;
use crate::store::calendar;
use axum::{Extension, Json};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Tag for OpenAPI documentation.
pub const PUBLIC_TAG: &str = "Visitor Information";

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventSummary {
    pub title: String,
    pub description: Option<String>,
}

/// Events keyed by ISO date, wrapped in a one-element list.
#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlyEvents {
    pub monthly_events: Vec<BTreeMap<String, Vec<EventSummary>>>,
}

/// Map each day label to its opening hours.
pub fn hours_by_day(rows: Vec<operating_hour::Model>) -> BTreeMap<String, String> {
    rows.into_iter().map(|h| (h.day, h.hours)).collect()
}

/// Map each holiday name to its ISO date.
pub fn holidays_by_name(rows: Vec<holiday::Model>) -> BTreeMap<String, String> {
    rows.into_iter()
        .map(|h| (h.name, h.date.to_string()))
        .collect()
}

/// Group events by ISO date, keeping insertion order inside a day.
pub fn group_events(rows: Vec<event::Model>) -> MonthlyEvents {
    let mut grouped: BTreeMap<String, Vec<EventSummary>> = BTreeMap::new();
    for e in rows {
        grouped
            .entry(e.date.to_string())
            .or_default()
            .push(EventSummary {
                title: e.title,
                description: e.description,
            });
    }
    MonthlyEvents {
        monthly_events: vec![grouped],
    }
}

#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/api",
    tag = PUBLIC_TAG,
    operation_id = "API Root",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    MessageResponse::new("Welcome to the High Museum of Art API")
}

#[tracing::instrument]
#[utoipa::path(
    get,
    path = "/api/status",
    tag = PUBLIC_TAG,
    operation_id = "Service Status",
    summary = "Static health payload",
    responses(
        (status = 200, description = "Service is operational", body = StatusResponse)
    )
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "operational",
        version: "1.0.0",
        source: "database",
    })
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/api/hours",
    tag = PUBLIC_TAG,
    operation_id = "Opening Hours",
    responses(
        (status = 200, description = "Opening hours keyed by day label", content_type = "application/json",
         example = json!({"Mon": "Closed", "Tues": "10:00 AM - 5:00 PM"}))
    )
)]
pub async fn hours(
    Extension(resources): Extension<AppResources>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    let rows = calendar::list_operating_hours(resources.db.as_ref()).await?;
    Ok(Json(hours_by_day(rows)))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/api/holidays",
    tag = PUBLIC_TAG,
    operation_id = "Holidays",
    responses(
        (status = 200, description = "Holiday dates keyed by name", content_type = "application/json",
         example = json!({"Christmas Day": "2026-12-25"}))
    )
)]
pub async fn holidays(
    Extension(resources): Extension<AppResources>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    let rows = calendar::list_holidays(resources.db.as_ref()).await?;
    Ok(Json(holidays_by_name(rows)))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/api/events",
    tag = PUBLIC_TAG,
    operation_id = "Events By Date",
    responses(
        (status = 200, description = "Events grouped by date", body = MonthlyEvents)
    )
)]
pub async fn events(
    Extension(resources): Extension<AppResources>,
) -> Result<Json<MonthlyEvents>, ApiError> {
    let rows = calendar::list_events(resources.db.as_ref()).await?;
    Ok(Json(group_events(rows)))
}
