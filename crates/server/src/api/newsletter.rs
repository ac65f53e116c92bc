use crate::api::auth::MemberAuth;
use crate::newsletter::NewsletterResponse;
use axum::{Json, http::HeaderMap, http::header};

/// Tag for OpenAPI documentation.
pub const NEWSLETTER_TAG: &str = "Newsletter";

#[tracing::instrument(skip_all)]
#[utoipa::path(
    get,
    path = "/api/newsletter",
    tag = NEWSLETTER_TAG,
    operation_id = "Get Newsletter",
    summary = "Current issue in the caller's language",
    description = "Language is taken from `Accept-Language`: any mention of `es` selects Spanish, \
                   otherwise `fr` selects French, otherwise English.",
    security(("Authorization" = [])),
    params(("Accept-Language" = Option<String>, Header, description = "Language hint")),
    responses(
        (status = 200, description = "Newsletter issue with verification hash", content_type = "application/json"),
        (status = 401, description = "Missing or invalid bearer token", body = crate::error::ErrorBody)
    )
)]
pub async fn get_newsletter(
    MemberAuth(member): MemberAuth,
    headers: HeaderMap,
) -> Json<NewsletterResponse> {
    let hint = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());
    tracing::debug!(account_id = member.id, language = ?hint, "newsletter requested");
    Json(NewsletterResponse::for_hint(hint))
}
