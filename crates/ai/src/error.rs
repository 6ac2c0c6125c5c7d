use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP transport or serialization failure talking to the provider.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status or unusable body.
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    /// No API key configured; the coaching service is inactive.
    #[error("AI service not configured")]
    NotConfigured,
}
