//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach repositories through the Unit of Work.

mod auth_service;
mod business_service;
pub mod container;
mod staff_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims};
pub use business_service::{BusinessManager, BusinessService};
pub use staff_service::{StaffManager, StaffService};
pub use user_service::{UserManager, UserService};
