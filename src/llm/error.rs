//! Generation service error types

use thiserror::Error;

/// Errors that can occur while talking to the generation service
#[derive(Debug, Error)]
pub enum LlmError {
    /// The configured credential environment variable is unset
    #[error("API key not found: set the {0} environment variable")]
    MissingCredential(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The service answered successfully but produced no usable text
    #[error("empty completion: {0}")]
    EmptyCompletion(String),
}

impl LlmError {
    /// Check if this is the fail-fast startup error
    pub fn is_configuration(&self) -> bool {
        matches!(self, LlmError::MissingCredential(_))
    }
}
