//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::password_handler;

/// OpenAPI documentation for the Staff Password Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staff Password Service",
        version = "0.1.0",
        description = "Admin-initiated staff password resets",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        password_handler::set_user_password,
    ),
    components(
        schemas(
            password_handler::SetPasswordRequest,
            password_handler::SetPasswordResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Administration", description = "Admin-only account operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Platform-issued ID token"))
                        .build(),
                ),
            );
        }
    }
}
