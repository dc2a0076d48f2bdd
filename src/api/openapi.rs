//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, business_handler, staff_handler, user_handler};
use crate::domain::{
    AuthResponse, Business, BusinessType, CreateBusiness, CreateStaff, CreateUser, Credentials,
    JobPosition, Staff, UpdateBusiness, UpdateStaff,
};

/// OpenAPI documentation for the Business & Staff API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Business & Staff API",
        version = "0.1.0",
        description = "Manage businesses and their staff, with JWT authentication",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        user_handler::register,
        // Business endpoints
        business_handler::list_businesses,
        business_handler::get_business,
        business_handler::create_business,
        business_handler::update_business,
        business_handler::delete_business,
        // Staff endpoints
        staff_handler::list_staff,
        staff_handler::get_staff,
        staff_handler::create_staff,
        staff_handler::update_staff,
        staff_handler::delete_staff,
    ),
    components(
        schemas(
            // Auth types
            CreateUser,
            Credentials,
            AuthResponse,
            // Business types
            Business,
            BusinessType,
            CreateBusiness,
            UpdateBusiness,
            // Staff types
            Staff,
            JobPosition,
            CreateStaff,
            UpdateStaff,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login"),
        (name = "Users", description = "Account registration"),
        (name = "Business", description = "Business management"),
        (name = "Staff", description = "Staff management, nested under a business")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
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
                        .description(Some("JWT token obtained from /auth/login or /users"))
                        .build(),
                ),
            );
        }
    }
}
