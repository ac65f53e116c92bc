//! OpenAPI/Utoipa configuration.

use crate::api::{
    admin::ADMIN_TAG, email_queue::EMAIL_TAG, membership::MEMBERSHIP_TAG,
    newsletter::NEWSLETTER_TAG, public::PUBLIC_TAG,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

/// Security addon for OpenAPI documentation.
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    #[tracing::instrument(skip(self, openapi))]
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            let bearer = HttpBuilder::new()
                .scheme(HttpAuthScheme::Bearer)
                .bearer_format("JWT")
                .description(Some(
                    "Use the `access_token` returned by `/api/login`. Tokens expire after 30 minutes.",
                ))
                .build();
            components.add_security_scheme("Authorization", SecurityScheme::Http(bearer));
        }
    }
}

/// OpenAPI documentation configuration.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "High Museum of Art API",
        version = "1.0.0",
        description = "Visitor information, membership and newsletter backend for the museum website."
    ),
    tags(
        (name = PUBLIC_TAG, description = "Opening hours, holidays and events"),
        (name = MEMBERSHIP_TAG, description = "Member accounts and access tokens"),
        (name = NEWSLETTER_TAG, description = "Member newsletter"),
        (name = EMAIL_TAG, description = "Outbound email queue"),
        (name = ADMIN_TAG, description = "Staff calendar management and newsletter operations")
    )
)]
pub struct ApiDoc;
