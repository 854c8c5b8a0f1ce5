//! Password value object.
//!
//! Hashing uses Argon2id with the crate's default parameters. Callers cannot
//! tune the cost; every stored hash is produced with the same configuration.

use argon2::{
    password_hash::{
        rand_core::OsRng, Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// A salted one-way password hash in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Errors
    /// Returns an internal error if the hasher rejects the input.
    pub fn hash(plain_text: &str) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap an existing hash (from storage or from a caller).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plaintext password against this hash.
    ///
    /// A wrong password yields `Ok(false)`. A hash that cannot be parsed, or
    /// that names an algorithm or parameters the verifier does not support,
    /// is a validation error.
    pub fn verify(&self, plain_text: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(&self.hash)
            .map_err(|e| DomainError::validation(format!("Malformed password hash: {}", e)))?;

        match Self::argon2().verify_password(plain_text.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(HashError::Password) => Ok(false),
            Err(e) => Err(DomainError::validation(format!(
                "Malformed password hash: {}",
                e
            ))),
        }
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}
