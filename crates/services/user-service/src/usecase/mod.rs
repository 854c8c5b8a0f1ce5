//! Use case layer.

mod user_usecase;

pub use user_usecase::{UserManager, UserUsecase};
