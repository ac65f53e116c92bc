//! HTTP surface of the museum backend.
//!
//! - `public` - visitor information (/api, /api/status, /api/hours, /api/holidays, /api/events)
//! - `admin` - calendar writes and newsletter operations
//! - `membership` - register, login, unsubscribe, cancel
//! - `newsletter` - localized newsletter for signed-in members
//! - `email_queue` - outbound email intake
//! - `auth` - bearer-token extractor
//! - `openapi` - OpenAPI/Utoipa configuration

pub mod admin;
pub mod auth;
pub mod email_queue;
pub mod membership;
pub mod newsletter;
pub mod openapi;
pub mod public;

use crate::AppResources;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_redoc::{Redoc, Servable};

/// Build the full application router, with API docs served at `/api-docs`.
pub fn router(resources: AppResources) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(openapi::ApiDoc::openapi())
        .routes(routes!(public::root))
        .routes(routes!(public::status))
        .routes(routes!(public::hours))
        .routes(routes!(public::holidays, admin::create_holiday))
        .routes(routes!(admin::delete_holiday))
        .routes(routes!(public::events, admin::create_event))
        .routes(routes!(admin::delete_event))
        .routes(routes!(admin::list_holidays))
        .routes(routes!(admin::list_events))
        .routes(routes!(admin::trigger_newsletter))
        .routes(routes!(admin::newsletter_logs))
        .routes(routes!(membership::register))
        .routes(routes!(membership::login))
        .routes(routes!(membership::unsubscribe))
        .routes(routes!(membership::cancel))
        .routes(routes!(newsletter::get_newsletter))
        .routes(routes!(email_queue::queue_email))
        .layer(axum::Extension(resources))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .split_for_parts();

    router.merge(Redoc::with_url("/api-docs", api))
}

/// Serve the API on `bind_address` until `shutdown` resolves.
#[tracing::instrument(skip(resources, shutdown))]
pub async fn start_webserver<F>(
    resources: AppResources,
    bind_address: &str,
    shutdown: F,
) -> color_eyre::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = router(resources);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!(
        name = "api.server.listening",
        target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
        addr = %bind_address,
        message = "Server running"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| color_eyre::Report::msg(format!("Failed to start server: {e}")))?;

    Ok(())
}
