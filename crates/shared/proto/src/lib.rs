//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for
//! UserService: registration, lookup, listing, profile update and
//! password verification.

/// User service definitions.
pub mod user {
    tonic::include_proto!("user");
}

// Re-export commonly used items
pub use user::user_service_client::UserServiceClient;
pub use user::user_service_server::{UserService, UserServiceServer};
