//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod constants;
pub mod error;
pub mod pagination;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use pagination::Page;
pub use password::Password;
pub use user::{
    birthday_from_seconds, birthday_to_seconds, validate_mobile, CreateUser, Gender, UpdateUser,
    User, UserRole,
};
