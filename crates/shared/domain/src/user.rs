//! User domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    GENDER_FEMALE, GENDER_MALE, MAX_MOBILE_LENGTH, MAX_NICKNAME_LENGTH, ROLE_ADMIN_CODE,
    ROLE_REGULAR_CODE,
};
use crate::error::{DomainError, DomainResult};

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Regular,
    Admin,
}

impl UserRole {
    /// Stored integer code
    pub fn code(&self) -> i32 {
        match self {
            UserRole::Regular => ROLE_REGULAR_CODE,
            UserRole::Admin => ROLE_ADMIN_CODE,
        }
    }
}

/// Unknown codes fall back to the regular role.
impl From<i32> for UserRole {
    fn from(code: i32) -> Self {
        match code {
            ROLE_ADMIN_CODE => UserRole::Admin,
            _ => UserRole::Regular,
        }
    }
}

impl From<UserRole> for i32 {
    fn from(role: UserRole) -> Self {
        role.code()
    }
}

/// Gender enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => GENDER_MALE,
            Gender::Female => GENDER_FEMALE,
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GENDER_MALE => Ok(Gender::Male),
            GENDER_FEMALE => Ok(Gender::Female),
            other => Err(DomainError::validation(format!(
                "Unknown gender '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a stored seconds-since-epoch birthday into a timestamp.
///
/// Values outside chrono's representable range are treated as absent.
pub fn birthday_from_seconds(seconds: Option<i64>) -> Option<DateTime<Utc>> {
    seconds.and_then(|s| DateTime::from_timestamp(s, 0))
}

/// Convert a birthday into stored seconds. Sub-second precision is dropped.
pub fn birthday_to_seconds(birthday: Option<DateTime<Utc>>) -> Option<i64> {
    birthday.map(|b| b.timestamp())
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub mobile: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub nickname: String,
    pub birthday: Option<DateTime<Utc>>,
    pub gender: Gender,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if user is soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Registration input. The password is plaintext and is hashed by the repository.
#[derive(Clone, Deserialize)]
pub struct CreateUser {
    pub mobile: String,
    pub password: String,
    pub nickname: String,
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("mobile", &self.mobile)
            .field("password", &"[REDACTED]")
            .field("nickname", &self.nickname)
            .finish()
    }
}

impl CreateUser {
    /// Required-field checks performed before storage is touched.
    pub fn validate(&self) -> DomainResult<()> {
        validate_mobile(&self.mobile)?;
        if self.password.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }
        validate_nickname(&self.nickname)
    }
}

/// Profile update. Only these fields are ever written by an update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub id: i64,
    pub nickname: String,
    pub gender: Gender,
    pub birthday: Option<DateTime<Utc>>,
}

impl UpdateUser {
    pub fn validate(&self) -> DomainResult<()> {
        validate_nickname(&self.nickname)
    }
}

/// A mobile number is 1 to 11 ASCII digits.
pub fn validate_mobile(mobile: &str) -> DomainResult<()> {
    if mobile.is_empty() {
        return Err(DomainError::validation("Mobile is required"));
    }
    if mobile.len() > MAX_MOBILE_LENGTH || !mobile.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::validation(format!(
            "Mobile must be at most {} digits",
            MAX_MOBILE_LENGTH
        )));
    }
    Ok(())
}

fn validate_nickname(nickname: &str) -> DomainResult<()> {
    if nickname.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(DomainError::validation(format!(
            "Nickname must be at most {} characters",
            MAX_NICKNAME_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(mobile: &str, password: &str, nickname: &str) -> CreateUser {
        CreateUser {
            mobile: mobile.to_string(),
            password: password.to_string(),
            nickname: nickname.to_string(),
        }
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(UserRole::from(1), UserRole::Regular);
        assert_eq!(UserRole::from(2), UserRole::Admin);
        assert_eq!(UserRole::from(7), UserRole::Regular);
        assert_eq!(i32::from(UserRole::Admin), 2);
        assert_eq!(UserRole::default().code(), 1);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("other".parse::<Gender>().is_err());
        assert_eq!(Gender::default(), Gender::Male);
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn test_birthday_conversion() {
        assert_eq!(birthday_from_seconds(None), None);

        let birthday = birthday_from_seconds(Some(693_629_981)).unwrap();
        assert_eq!(birthday_to_seconds(Some(birthday)), Some(693_629_981));

        // Epoch zero is a real date, distinct from no birthday
        assert!(birthday_from_seconds(Some(0)).is_some());
    }

    #[test]
    fn test_birthday_drops_sub_second_precision() {
        let precise = DateTime::from_timestamp(693_629_981, 750_000_000).unwrap();
        let stored = birthday_to_seconds(Some(precise));

        assert_eq!(stored, Some(693_629_981));
        assert_ne!(birthday_from_seconds(stored), Some(precise));
    }

    #[test]
    fn test_validate_mobile() {
        assert!(validate_mobile("13803881388").is_ok());
        assert!(validate_mobile("1").is_ok());
        assert!(validate_mobile("").is_err());
        assert!(validate_mobile("138038813880").is_err());
        assert!(validate_mobile("1380388x388").is_err());
        assert!(validate_mobile("+8613803881").is_err());
    }

    #[test]
    fn test_create_user_validation() {
        assert!(create_input("13803881388", "admin123456", "aliliin")
            .validate()
            .is_ok());
        assert!(create_input("13803881388", "", "aliliin")
            .validate()
            .is_err());
        assert!(create_input("13803881388", "admin123456", &"n".repeat(26))
            .validate()
            .is_err());
        // Multi-byte nicknames are measured in characters
        assert!(create_input("13803881388", "admin123456", &"昵".repeat(25))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_create_user_debug_redacts_password() {
        let input = create_input("13803881388", "admin123456", "aliliin");
        let debug = format!("{:?}", input);

        assert!(!debug.contains("admin123456"));
        assert!(debug.contains("13803881388"));
    }
}
