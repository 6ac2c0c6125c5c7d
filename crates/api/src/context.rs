use musclemate_core::UserId;

/// Authenticated identity for a request.
///
/// Inserted by the session middleware; must be present for all
/// account-scoped routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: UserId,
    username: String,
}

impl Identity {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Hash of the session token the request authenticated with.
///
/// Logout deletes the session by this hash; the raw token is never kept
/// past the middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHash(pub String);
