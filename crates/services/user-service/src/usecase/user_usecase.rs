//! User use cases - the façade the transport layer talks to.
//!
//! Mirrors the repository one-to-one. Input validation that does not need
//! storage runs here; repository errors pass through unchanged.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{validate_mobile, CreateUser, UpdateUser, User};

use crate::repository::UserRepository;

/// User use case trait for dependency injection.
#[async_trait]
pub trait UserUsecase: Send + Sync {
    /// Register a new user
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// One page of active users plus the total active count
    async fn list_users(&self, page: i64, page_size: i64) -> AppResult<(Vec<User>, u64)>;

    /// Update nickname, gender and birthday
    async fn update_user(&self, update: UpdateUser) -> AppResult<bool>;

    /// Get active user by mobile number
    async fn user_by_mobile(&self, mobile: &str) -> AppResult<User>;

    /// Get active user by ID
    async fn user_by_id(&self, id: i64) -> AppResult<User>;

    /// Verify a plaintext password against a stored hash
    fn check_password(&self, password: &str, password_hash: &str) -> AppResult<bool>;
}

/// Concrete implementation of UserUsecase using a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserUsecase for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        input.validate()?;
        self.repo.create_user(input).await
    }

    async fn list_users(&self, page: i64, page_size: i64) -> AppResult<(Vec<User>, u64)> {
        self.repo.list_users(page, page_size).await
    }

    async fn update_user(&self, update: UpdateUser) -> AppResult<bool> {
        update.validate()?;
        self.repo.update_user(update).await
    }

    async fn user_by_mobile(&self, mobile: &str) -> AppResult<User> {
        validate_mobile(mobile)?;
        self.repo.user_by_mobile(mobile).await
    }

    async fn user_by_id(&self, id: i64) -> AppResult<User> {
        self.repo.user_by_id(id).await
    }

    fn check_password(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        self.repo.check_password(password, password_hash)
    }
}
