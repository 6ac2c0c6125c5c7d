use async_trait::async_trait;

use crate::error::AiError;

/// A client for a third-party generative text API.
///
/// Implementations take a finished prompt and return the model's raw
/// text response. Prompt templating is the caller's job (see
/// [`crate::prompt`]); retries, caching and streaming are out of scope.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Generate a text completion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;

    /// Model identifier reported to clients (e.g. in status payloads).
    fn model_name(&self) -> &str;
}
