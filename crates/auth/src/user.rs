use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use musclemate_core::{DomainError, DomainResult, UserId};

/// A registered user.
///
/// `password_hash` is the encoded hash produced by
/// [`crate::password::hash_password`]; the raw password is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Validated registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> DomainResult<Self> {
        let username = username.into().trim().to_string();
        let email = email.into().trim().to_string();
        let password = password.into();

        if username.is_empty() || password.is_empty() {
            return Err(DomainError::validation("username and password required"));
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }
}

/// Login credentials as presented by the caller. Verified against the
/// stored hash; never logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
