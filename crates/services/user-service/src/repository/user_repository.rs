//! User repository: persistence, record translation and password hashing.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use tracing::{debug, info, warn};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{birthday_to_seconds, CreateUser, Gender, Page, Password, UpdateUser, User, UserRole};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// All lookups and listings exclude soft-deleted records. Registration
/// treats a soft-deleted mobile number as still taken.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Hash the password and insert a new user. Fails with `Conflict` if the
    /// mobile number is already registered.
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// One page of active users ordered by id, plus the total active count.
    /// Out-of-range paging values are normalized, never rejected.
    async fn list_users(&self, page: i64, page_size: i64) -> AppResult<(Vec<User>, u64)>;

    /// Apply nickname, gender and birthday to an active user.
    async fn update_user(&self, update: UpdateUser) -> AppResult<bool>;

    /// Find active user by mobile number
    async fn user_by_mobile(&self, mobile: &str) -> AppResult<User>;

    /// Find active user by ID
    async fn user_by_id(&self, id: i64) -> AppResult<User>;

    /// Compare a plaintext password with a stored hash.
    fn check_password(&self, password: &str, password_hash: &str) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map an insert failure, reporting unique-index violations as a conflict.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("User"),
        _ => AppError::from(err),
    }
}

/// Argon2 is CPU-bound; hash on the blocking pool.
async fn hash_password(plain: String) -> AppResult<Password> {
    let hashed = tokio::task::spawn_blocking(move || Password::hash(&plain))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))?;
    Ok(hashed?)
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        // Early exit only; the unique index settles concurrent registrations
        let existing = UserEntity::find()
            .filter(user::Column::Mobile.eq(input.mobile.as_str()))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            warn!(mobile = %input.mobile, "Registration rejected: mobile already registered");
            return Err(AppError::conflict("User"));
        }

        let CreateUser {
            mobile,
            password,
            nickname,
        } = input;
        let password = hash_password(password).await?;
        let now = Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            mobile: Set(mobile),
            password_hash: Set(password.into_string()),
            nickname: Set(nickname),
            birthday: Set(None),
            gender: Set(Gender::default().to_string()),
            role: Set(UserRole::default().into()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_error)?;
        info!(user_id = model.id, "User created");

        Ok(User::from(model))
    }

    async fn list_users(&self, page: i64, page_size: i64) -> AppResult<(Vec<User>, u64)> {
        let page = Page::new(page, page_size);
        debug!(page = page.page(), page_size = page.page_size(), "Listing users");

        let query = UserEntity::find().filter(user::Column::DeletedAt.is_null());
        let total = query.clone().count(&self.db).await?;

        let models = query
            .order_by_asc(user::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok((models.into_iter().map(User::from).collect(), total))
    }

    async fn update_user(&self, update: UpdateUser) -> AppResult<bool> {
        let user = UserEntity::find_by_id(update.id)
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = user.into();
        active.nickname = Set(update.nickname);
        active.gender = Set(update.gender.to_string());
        active.birthday = Set(birthday_to_seconds(update.birthday));
        active.updated_at = Set(Utc::now());

        active.update(&self.db).await?;
        debug!(user_id = update.id, "User profile updated");

        Ok(true)
    }

    async fn user_by_mobile(&self, mobile: &str) -> AppResult<User> {
        UserEntity::find()
            .filter(user::Column::Mobile.eq(mobile))
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or_not_found()
    }

    async fn user_by_id(&self, id: i64) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or_not_found()
    }

    fn check_password(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        Ok(Password::from_hash(password_hash).verify(password)?)
    }
}
