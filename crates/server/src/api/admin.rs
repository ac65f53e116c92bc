//! Staff endpoints for the event and holiday calendars and the newsletter sweep.
//!
//! These routes are not authenticated. Adding a [`crate::api::auth::MemberAuth`]
//! argument to a handler is enough to put it behind a bearer token.

use crate::AppResources;
use crate::entity::{event, holiday, newsletter_log};
use crate::error::ApiError;
use crate::store::{calendar, newsletter_logs};
use crate::sweeps::newsletter_sweep_job;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;
use utoipa::ToSchema;

use super::public::MessageResponse;

/// Tag for OpenAPI documentation.
pub const ADMIN_TAG: &str = "Administration";

pub const TRIGGER_MESSAGE: &str =
    "Newsletter task triggered manually. Check server logs and newsletter_logs table.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct EventCreate {
    pub title: String,
    #[schema(example = "2026-01-14")]
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct HolidayCreate {
    pub name: String,
    #[schema(example = "2026-12-25")]
    pub date: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    fn deleted() -> Json<Self> {
        Json(Self { status: "deleted" })
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_calendar_date(raw: &str) -> Result<Date, ApiError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|e| ApiError::Unprocessable(format!("Invalid date '{raw}': {e}")))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/api/admin/holidays",
    tag = ADMIN_TAG,
    operation_id = "List Holidays",
    summary = "All holidays with ids, ordered by date",
    responses(
        (status = 200, description = "Holiday rows", body = [holiday::Model])
    )
)]
pub async fn list_holidays(
    Extension(resources): Extension<AppResources>,
) -> Result<Json<Vec<holiday::Model>>, ApiError> {
    Ok(Json(
        calendar::list_holidays_by_date(resources.db.as_ref()).await?,
    ))
}

#[tracing::instrument(skip(resources, payload), fields(holiday = %payload.name))]
#[utoipa::path(
    post,
    path = "/api/holidays",
    tag = ADMIN_TAG,
    operation_id = "Create Holiday",
    request_body(content = HolidayCreate, description = "Holiday name and ISO date"),
    responses(
        (status = 200, description = "Created holiday", body = holiday::Model),
        (status = 422, description = "Date is not a valid calendar date", body = crate::error::ErrorBody)
    )
)]
pub async fn create_holiday(
    Extension(resources): Extension<AppResources>,
    Json(payload): Json<HolidayCreate>,
) -> Result<Json<holiday::Model>, ApiError> {
    let date = parse_calendar_date(&payload.date)?;
    let created = calendar::create_holiday(resources.db.as_ref(), payload.name, date).await?;
    tracing::info!(
        name = "api.admin.holiday_created",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        id = created.id,
        message = "Holiday created"
    );
    Ok(Json(created))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    delete,
    path = "/api/holidays/{id}",
    tag = ADMIN_TAG,
    operation_id = "Delete Holiday",
    params(("id" = i32, Path, description = "Holiday id")),
    responses(
        (status = 200, description = "Holiday deleted", body = DeletedResponse),
        (status = 404, description = "Holiday not found", body = crate::error::ErrorBody)
    )
)]
pub async fn delete_holiday(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if calendar::delete_holiday(resources.db.as_ref(), id).await? {
        Ok(DeletedResponse::deleted())
    } else {
        Err(ApiError::not_found("Holiday not found"))
    }
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/api/admin/events",
    tag = ADMIN_TAG,
    operation_id = "List Events",
    summary = "All events with ids, ordered by date",
    responses(
        (status = 200, description = "Event rows", body = [event::Model])
    )
)]
pub async fn list_events(
    Extension(resources): Extension<AppResources>,
) -> Result<Json<Vec<event::Model>>, ApiError> {
    Ok(Json(calendar::list_events_by_date(resources.db.as_ref()).await?))
}

#[tracing::instrument(skip(resources, payload), fields(title = %payload.title))]
#[utoipa::path(
    post,
    path = "/api/events",
    tag = ADMIN_TAG,
    operation_id = "Create Event",
    request_body(content = EventCreate, description = "Event title, ISO date and optional description"),
    responses(
        (status = 200, description = "Created event", body = event::Model),
        (status = 422, description = "Date is not a valid calendar date", body = crate::error::ErrorBody)
    )
)]
pub async fn create_event(
    Extension(resources): Extension<AppResources>,
    Json(payload): Json<EventCreate>,
) -> Result<Json<event::Model>, ApiError> {
    let date = parse_calendar_date(&payload.date)?;
    let created = calendar::create_event(
        resources.db.as_ref(),
        payload.title,
        date,
        payload.description,
    )
    .await?;
    tracing::info!(
        name = "api.admin.event_created",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        id = created.id,
        message = "Event created"
    );
    Ok(Json(created))
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = ADMIN_TAG,
    operation_id = "Delete Event",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted", body = DeletedResponse),
        (status = 404, description = "Event not found", body = crate::error::ErrorBody)
    )
)]
pub async fn delete_event(
    Extension(resources): Extension<AppResources>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if calendar::delete_event(resources.db.as_ref(), id).await? {
        Ok(DeletedResponse::deleted())
    } else {
        Err(ApiError::not_found("Event not found"))
    }
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    post,
    path = "/api/admin/newsletter/test-trigger",
    tag = ADMIN_TAG,
    operation_id = "Trigger Newsletter",
    summary = "Run the monthly newsletter sweep now",
    description = "Runs the sweep inline. Failures are logged, never returned; \
                   check the newsletter logs endpoint for per-member results.",
    responses(
        (status = 200, description = "Sweep ran", body = MessageResponse)
    )
)]
pub async fn trigger_newsletter(
    Extension(resources): Extension<AppResources>,
) -> Json<MessageResponse> {
    tracing::info!(
        name = "api.admin.newsletter_triggered",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        message = "Manual newsletter trigger"
    );
    newsletter_sweep_job(
        resources.db.as_ref(),
        resources.delivery.as_ref(),
        &resources.config.newsletter_url(),
    )
    .await;
    MessageResponse::new(TRIGGER_MESSAGE)
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/api/admin/newsletter/logs",
    tag = ADMIN_TAG,
    operation_id = "Newsletter Logs",
    summary = "Most recent newsletter dispatch rows",
    responses(
        (status = 200, description = "Up to 50 rows, newest first", body = [newsletter_log::Model])
    )
)]
pub async fn newsletter_logs(
    Extension(resources): Extension<AppResources>,
) -> Result<Json<Vec<newsletter_log::Model>>, ApiError> {
    Ok(Json(newsletter_logs::list_recent(resources.db.as_ref()).await?))
}
