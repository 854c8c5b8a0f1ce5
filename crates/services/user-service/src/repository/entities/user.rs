//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{birthday_from_seconds, birthday_to_seconds, User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Business key; the unique index is what guarantees one account per number
    #[sea_orm(unique, column_type = "String(StringLen::N(11))")]
    pub mobile: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub password_hash: String,
    #[sea_orm(column_type = "String(StringLen::N(25))")]
    pub nickname: String,
    /// Seconds since the Unix epoch
    pub birthday: Option<i64>,
    #[sea_orm(column_type = "String(StringLen::N(16))")]
    pub gender: String,
    pub role: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Soft delete timestamp (NULL = active, set = deleted)
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            mobile: model.mobile,
            password_hash: model.password_hash,
            nickname: model.nickname,
            birthday: birthday_from_seconds(model.birthday),
            gender: model.gender.parse().unwrap_or_default(),
            role: UserRole::from(model.role),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

/// Convert domain entity back to a full row
impl From<User> for Model {
    fn from(user: User) -> Self {
        Model {
            id: user.id,
            mobile: user.mobile,
            password_hash: user.password_hash,
            nickname: user.nickname,
            birthday: birthday_to_seconds(user.birthday),
            gender: user.gender.to_string(),
            role: user.role.into(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            deleted_at: user.deleted_at,
        }
    }
}
