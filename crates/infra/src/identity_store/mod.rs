//! User and session persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use musclemate_auth::User;
use musclemate_core::UserId;

use crate::error::StoreError;

mod in_memory;
mod postgres;

pub use in_memory::InMemoryIdentityStore;
pub use postgres::PostgresIdentityStore;

/// Storage for registered users and their server-side sessions.
///
/// Sessions are keyed by the SHA-256 hash of the bearer token; the raw
/// token never reaches storage.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn username_exists(&self, username: &str) -> Result<bool, StoreError>;

    async fn insert_session(
        &self,
        token_hash: &str,
        user_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Resolve a session to its user, or `None` for unknown/expired-by-
    /// deletion tokens.
    async fn find_user_by_session(&self, token_hash: &str) -> Result<Option<User>, StoreError>;

    /// Delete a session. Deleting an unknown session is a no-op.
    async fn delete_session(&self, token_hash: &str) -> Result<(), StoreError>;
}
