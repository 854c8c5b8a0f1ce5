//! Shared fixtures for integration tests: an in-memory SQLite database.

#![allow(dead_code)]

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, NotSet, Set};

use common::DatabaseConfig;
use domain::CreateUser;
use user_service_lib::infra::Database;
use user_service_lib::repository::entities::user;

/// Fresh database with the users table created.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn setup_db() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };

    let db = Database::connect(&config).await.expect("connect sqlite");
    db.ensure_schema().await.expect("create schema");
    db
}

pub fn registration(mobile: &str, password: &str, nickname: &str) -> CreateUser {
    CreateUser {
        mobile: mobile.to_string(),
        password: password.to_string(),
        nickname: nickname.to_string(),
    }
}

/// Insert a row directly, skipping password hashing. For bulk listing tests.
pub async fn insert_row(db: &Database, mobile: &str) -> i64 {
    let now = Utc::now();
    let model = user::ActiveModel {
        id: NotSet,
        mobile: Set(mobile.to_string()),
        password_hash: Set("$argon2id$v=19$m=19456,t=2,p=1$placeholder".to_string()),
        nickname: Set(format!("user-{}", mobile)),
        birthday: Set(None),
        gender: Set("male".to_string()),
        role: Set(1),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(db.connection())
    .await
    .expect("insert row");

    model.id
}

/// Mark a user deleted the way an external collaborator would.
pub async fn soft_delete(db: &Database, id: i64) {
    let model = user::Entity::find_by_id(id)
        .one(db.connection())
        .await
        .expect("query user")
        .expect("user exists");

    let mut active: user::ActiveModel = model.into();
    active.deleted_at = Set(Some(Utc::now()));
    active.update(db.connection()).await.expect("soft delete");
}

/// Raw row count, including soft-deleted rows.
pub async fn row_count(db: &Database) -> u64 {
    use sea_orm::PaginatorTrait;

    user::Entity::find()
        .count(db.connection())
        .await
        .expect("count rows")
}
