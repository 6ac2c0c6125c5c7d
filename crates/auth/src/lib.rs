//! `musclemate-auth` — identity domain (registration, credentials, sessions).
//!
//! This crate is intentionally decoupled from HTTP and storage: it
//! validates registration/login payloads, hashes passwords, and mints
//! session tokens. Persisting users/sessions and extracting tokens from
//! requests happen in the infra and api layers.

pub mod password;
pub mod session;
pub mod user;

pub use password::{hash_password, verify_password, PasswordHashError};
pub use session::{SessionToken, SESSION_TOKEN_PREFIX};
pub use user::{Credentials, RegisterUser, User};
