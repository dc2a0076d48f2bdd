//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod business_repository;
pub(crate) mod entities;
mod staff_repository;
mod user_repository;

pub use business_repository::{BusinessRepository, BusinessStore};
pub use staff_repository::{StaffRepository, StaffStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use business_repository::MockBusinessRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use staff_repository::MockStaffRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
