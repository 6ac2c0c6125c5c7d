//! `musclemate-ai`
//!
//! **Responsibility:** boundary to the generative-AI coaching service.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on catalog or order types.
//! - It must not mutate domain state.
//! - It turns user input into prompts and returns raw model text.
//!
//! The client is constructed once at process startup and passed
//! explicitly to whatever needs it; there is no ambient global state,
//! so tests substitute a scripted client.

pub mod client;
pub mod error;
pub mod gemini;
pub mod prompt;

pub use client::GenerativeClient;
pub use error::AiError;
pub use gemini::{GeminiClient, GEMINI_MODEL};
