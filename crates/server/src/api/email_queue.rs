use crate::AppResources;
use crate::entity::timestamp_now;
use crate::error::ApiError;
use crate::store::outbound_emails;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tag for OpenAPI documentation.
pub const EMAIL_TAG: &str = "Email";

#[derive(Debug, Deserialize, ToSchema)]
pub struct EmailCreate {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueuedResponse {
    pub message: String,
    pub queue_id: i32,
}

#[tracing::instrument(skip_all)]
#[utoipa::path(
    post,
    path = "/api/email/queue",
    tag = EMAIL_TAG,
    operation_id = "Queue Email",
    summary = "Queue a message for the background drain",
    description = "Stores the message as `pending`. Delivery happens on the next drain sweep; \
                   failed attempts are retried until the row has failed five times.",
    request_body(content = EmailCreate),
    responses(
        (status = 200, description = "Message queued", body = QueuedResponse)
    )
)]
pub async fn queue_email(
    Extension(resources): Extension<AppResources>,
    Json(payload): Json<EmailCreate>,
) -> Result<Json<QueuedResponse>, ApiError> {
    let queued = outbound_emails::enqueue(
        resources.db.as_ref(),
        payload.recipient,
        payload.subject,
        payload.body,
        timestamp_now(),
    )
    .await?;
    tracing::info!(
        name = "api.email.queued",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        queue_id = queued.id,
        message = "Email queued for delivery"
    );
    Ok(Json(QueuedResponse {
        message: "Email queued for delivery".into(),
        queue_id: queued.id,
    }))
}
