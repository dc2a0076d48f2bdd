//! HTTP request handlers.

pub mod auth_handler;
pub mod business_handler;
pub mod staff_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use business_handler::{protected_business_routes, public_business_routes};
pub use staff_handler::staff_routes;
pub use user_handler::user_routes;
