//! Generation service boundary
//!
//! Provides the completion trait, the Gemini implementation, the error
//! taxonomy, and the declarative response schema.

use std::sync::Arc;

use tracing::debug;

mod client;
mod error;
mod gemini;
mod schema;

pub use client::{StructuredRequest, TextCompletion};
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use schema::Schema;

use crate::config::LlmConfig;

/// Create the generation client from configuration
///
/// Fails fast with `MissingCredential` when the configured API key
/// environment variable is unset: without it the generation capability is
/// never available.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn TextCompletion>, LlmError> {
    debug!(model = %config.model, "create_client: called");
    Ok(Arc::new(GeminiClient::from_config(config)?))
}
