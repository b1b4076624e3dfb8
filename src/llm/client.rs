//! Completion trait for the generation service
//!
//! The trait is the seam between the plan generator and the concrete
//! service, so tests can substitute a scripted implementation.

use async_trait::async_trait;

use super::error::LlmError;
use super::schema::Schema;

/// A structured-output completion request - everything needed for one call
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// Full natural-language instruction block
    pub prompt: String,

    /// Structural contract the reply must conform to
    pub schema: Schema,

    /// Sampling temperature
    pub temperature: f32,
}

/// One-shot structured text completion
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Run one completion and return the raw structured text of the reply
    ///
    /// The reply is expected to be machine-parseable with no prose wrapper;
    /// interpreting it is the caller's job.
    async fn complete(&self, request: StructuredRequest) -> Result<String, LlmError>;
}
