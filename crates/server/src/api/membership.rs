//! Member registration, login and account removal.

use crate::AppResources;
use crate::api::auth::MemberAuth;
use crate::credentials::{AccessToken, hash_password, verify_password};
use crate::entity::account::{self, normalize_email};
use crate::error::ApiError;
use crate::store::{accounts, newsletter_logs};
use axum::{Extension, Form, Json};
use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};
use serde::Deserialize;
use utoipa::ToSchema;

use super::public::MessageResponse;

/// Tag for OpenAPI documentation.
pub const MEMBERSHIP_TAG: &str = "Membership";

pub const EMAIL_TAKEN: &str = "Email already registered";
pub const LOGIN_FAILED: &str = "Incorrect email or password";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// OAuth2 password-grant style form; `username` carries the email.
#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CancelRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Remove an account and every newsletter log row recorded for its email.
pub async fn remove_member<C>(db: &C, member: &account::Model) -> Result<(), DbErr>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let logs = newsletter_logs::delete_for_email(&txn, &member.email).await?;
    accounts::delete_by_id(&txn, member.id).await?;
    txn.commit().await?;
    tracing::info!(
        name = "api.membership.removed",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        account_id = member.id,
        log_rows = logs,
        message = "Member account deleted"
    );
    Ok(())
}

#[tracing::instrument(skip_all)]
#[utoipa::path(
    post,
    path = "/api/register",
    tag = MEMBERSHIP_TAG,
    operation_id = "Register",
    request_body(content = RegisterRequest, description = "Email and password of the new member"),
    responses(
        (status = 200, description = "Account created", body = MessageResponse),
        (status = 400, description = "Email already registered", body = crate::error::ErrorBody)
    )
)]
pub async fn register(
    Extension(resources): Extension<AppResources>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = normalize_email(&payload.email);
    let db = resources.db.as_ref();

    if accounts::find_by_email(db, &email).await?.is_some() {
        return Err(ApiError::Conflict(EMAIL_TAKEN.into()));
    }

    let hashed = hash_password(&payload.password)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;
    let created = accounts::create(db, email, hashed)
        .await
        .map_err(|e| ApiError::from_insert(e, EMAIL_TAKEN))?;

    tracing::info!(
        name = "api.membership.registered",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        account_id = created.id,
        message = "Member registered"
    );
    Ok(MessageResponse::new("User created successfully"))
}

#[tracing::instrument(skip_all)]
#[utoipa::path(
    post,
    path = "/api/login",
    tag = MEMBERSHIP_TAG,
    operation_id = "Login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = AccessToken),
        (status = 401, description = "Unknown email or wrong password", body = crate::error::ErrorBody)
    )
)]
pub async fn login(
    Extension(resources): Extension<AppResources>,
    Form(form): Form<LoginForm>,
) -> Result<Json<AccessToken>, ApiError> {
    let email = normalize_email(&form.username);
    tracing::info!(
        name = "api.membership.login_attempt",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        email = %email,
        message = "Login attempt"
    );

    let Some(member) = accounts::find_by_email(resources.db.as_ref(), &email).await? else {
        tracing::info!(
            name = "api.membership.login_failed",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            email = %email,
            reason = "unknown_email",
            message = "Login failed"
        );
        return Err(ApiError::unauthorized(LOGIN_FAILED));
    };

    if !verify_password(&form.password, &member.hashed_password) {
        tracing::info!(
            name = "api.membership.login_failed",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            email = %email,
            reason = "wrong_password",
            message = "Login failed"
        );
        return Err(ApiError::unauthorized(LOGIN_FAILED));
    }

    let token = resources
        .credentials
        .issue_token(&member.email)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    tracing::info!(
        name = "api.membership.login_succeeded",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        email = %email,
        message = "Login successful"
    );
    Ok(Json(token))
}

#[tracing::instrument(skip_all)]
#[utoipa::path(
    delete,
    path = "/api/membership/unsubscribe",
    tag = MEMBERSHIP_TAG,
    operation_id = "Unsubscribe",
    summary = "Delete the calling member's account",
    security(("Authorization" = [])),
    responses(
        (status = 200, description = "Account and its newsletter logs deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid bearer token", body = crate::error::ErrorBody)
    )
)]
pub async fn unsubscribe(
    Extension(resources): Extension<AppResources>,
    MemberAuth(member): MemberAuth,
) -> Result<Json<MessageResponse>, ApiError> {
    remove_member(resources.db.as_ref(), &member).await?;
    Ok(MessageResponse::new(
        "Successfully unsubscribed and account deleted",
    ))
}

#[tracing::instrument(skip_all)]
#[utoipa::path(
    post,
    path = "/api/membership/cancel",
    tag = MEMBERSHIP_TAG,
    operation_id = "Cancel Membership",
    summary = "Delete an account by re-entering its credentials",
    request_body(content = CancelRequest),
    responses(
        (status = 200, description = "Account and its newsletter logs deleted", body = MessageResponse),
        (status = 400, description = "Passwords do not match", body = crate::error::ErrorBody),
        (status = 401, description = "Incorrect password", body = crate::error::ErrorBody),
        (status = 404, description = "Account not found", body = crate::error::ErrorBody)
    )
)]
pub async fn cancel(
    Extension(resources): Extension<AppResources>,
    Json(payload): Json<CancelRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if payload.password != payload.confirm_password {
        return Err(ApiError::bad_request("Passwords do not match"));
    }

    let email = normalize_email(&payload.email);
    let member = accounts::find_by_email(resources.db.as_ref(), &email)
        .await?
        .ok_or_else(|| ApiError::not_found("Account not found"))?;

    if !verify_password(&payload.password, &member.hashed_password) {
        return Err(ApiError::unauthorized("Incorrect password"));
    }

    remove_member(resources.db.as_ref(), &member).await?;
    Ok(MessageResponse::new("Membership successfully cancelled"))
}
