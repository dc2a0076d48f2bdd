//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod business;
pub mod staff;
pub mod user;
