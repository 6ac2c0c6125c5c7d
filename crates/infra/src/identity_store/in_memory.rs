use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use musclemate_auth::User;
use musclemate_core::{DomainError, UserId};

use super::IdentityStore;
use crate::error::StoreError;

/// In-memory identity store for dev/test.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    users: RwLock<Vec<User>>,
    sessions: RwLock<HashMap<String, UserId>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().expect("identity lock poisoned");
        if users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::conflict(format!(
                "username '{}' already taken",
                user.username
            ))
            .into());
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().expect("identity lock poisoned");
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn username_exists(&self, username: &str) -> Result<bool, StoreError> {
        let users = self.users.read().expect("identity lock poisoned");
        Ok(users.iter().any(|u| u.username == username))
    }

    async fn insert_session(
        &self,
        token_hash: &str,
        user_id: UserId,
        _created_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.sessions
            .write()
            .expect("identity lock poisoned")
            .insert(token_hash.to_string(), user_id);
        Ok(())
    }

    async fn find_user_by_session(&self, token_hash: &str) -> Result<Option<User>, StoreError> {
        let user_id = {
            let sessions = self.sessions.read().expect("identity lock poisoned");
            sessions.get(token_hash).copied()
        };
        let Some(user_id) = user_id else {
            return Ok(None);
        };
        let users = self.users.read().expect("identity lock poisoned");
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn delete_session(&self, token_hash: &str) -> Result<(), StoreError> {
        self.sessions
            .write()
            .expect("identity lock poisoned")
            .remove(token_hash);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(username: &str) -> User {
        User {
            id: UserId::new(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "sha256$1$00$00".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let store = InMemoryIdentityStore::new();
        store.insert_user(&sample_user("lena")).await.unwrap();

        let err = store.insert_user(&sample_user("lena")).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Domain(DomainError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn username_exists_tracks_registrations() {
        let store = InMemoryIdentityStore::new();
        assert!(!store.username_exists("ana").await.unwrap());

        store.insert_user(&sample_user("ana")).await.unwrap();
        assert!(store.username_exists("ana").await.unwrap());
        assert!(!store.username_exists("anab").await.unwrap());
    }

    #[tokio::test]
    async fn session_round_trip() {
        let store = InMemoryIdentityStore::new();
        let user = sample_user("marco");
        store.insert_user(&user).await.unwrap();

        store
            .insert_session("abc123", user.id, Utc::now())
            .await
            .unwrap();

        let found = store.find_user_by_session("abc123").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));

        store.delete_session("abc123").await.unwrap();
        assert!(store.find_user_by_session("abc123").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_session_resolves_to_none() {
        let store = InMemoryIdentityStore::new();
        assert!(store.find_user_by_session("nope").await.unwrap().is_none());
        // deleting an unknown session is a no-op
        store.delete_session("nope").await.unwrap();
    }
}
