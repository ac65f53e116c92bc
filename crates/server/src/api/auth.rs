//! Bearer-token guard for member-only routes.
//!
//! Adding `MemberAuth` to a handler's arguments is all it takes to protect a route.

use crate::AppResources;
use crate::entity::account;
use crate::error::ApiError;
use crate::store::accounts;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

pub const NOT_AUTHENTICATED: &str = "Not authenticated";
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Axum extractor that validates `Authorization: Bearer <token>` and resolves the
/// token's subject to an existing account.
///
/// # Example
///
/// ```ignore
/// async fn handler(MemberAuth(member): MemberAuth) -> impl IntoResponse {
///     format!("Hello, {}", member.email)
/// }
/// ```
pub struct MemberAuth(pub account::Model);

/// Pull the raw token out of an `Authorization` header value.
pub fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    let value = header_value?;
    let (scheme, token) = value.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() {
        Some(token.trim())
    } else {
        None
    }
}

impl<S> FromRequestParts<S> for MemberAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let resources = parts
            .extensions
            .get::<AppResources>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("AppResources not found in extensions");
                ApiError::Internal("missing application resources".into())
            })?;

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let token = bearer_token(auth_header).ok_or_else(|| ApiError::unauthorized(NOT_AUTHENTICATED))?;

        let email = resources.credentials.validate_token(token).map_err(|e| {
            tracing::debug!(error = %e, "rejected bearer token");
            ApiError::unauthorized(INVALID_CREDENTIALS)
        })?;

        let member = accounts::find_by_email(resources.db.as_ref(), &email)
            .await?
            .ok_or_else(|| {
                tracing::debug!(email = %email, "token subject has no account");
                ApiError::unauthorized(INVALID_CREDENTIALS)
            })?;

        Ok(MemberAuth(member))
    }
}
