//! Gemini generateContent client
//!
//! Implements the `TextCompletion` trait against the Gemini REST API in
//! JSON mode: the request declares a response schema and MIME type, the
//! reply carries the structured text in its first candidate.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::client::{StructuredRequest, TextCompletion};
use super::error::LlmError;
use crate::config::LlmConfig;

/// Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config and
    /// fails with `MissingCredential` when it is unset, so a client without
    /// a credential is never constructed.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| LlmError::MissingCredential(config.api_key_env.clone()))?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
        })
    }

    /// Build the request body for the generateContent endpoint
    fn build_request_body(&self, request: &StructuredRequest) -> serde_json::Value {
        debug!(%self.model, "build_request_body: called");
        serde_json::json!({
            "contents": [{ "parts": [{ "text": request.prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.schema.to_request_json(),
                "temperature": request.temperature,
            },
        })
    }

    /// Pull the structured text out of the response envelope
    fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        let text = text.trim().to_string();
        if text.is_empty() {
            debug!("extract_text: no text in response");
            return Err(LlmError::EmptyCompletion(
                "the service returned no candidate text".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl TextCompletion for GeminiClient {
    async fn complete(&self, request: StructuredRequest) -> Result<String, LlmError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let body = self.build_request_body(&request);
        debug!(%url, "complete: sending request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.api_key.clone())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            debug!(%status, "complete: API error");
            return Err(LlmError::Api { status, message });
        }

        debug!("complete: success");
        let api_response: GenerateContentResponse = response.json().await?;
        Self::extract_text(api_response)
    }
}

// Gemini API response envelope types

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
