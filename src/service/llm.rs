//! Gemini-backed LLM client for digest generation.

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::base::{config::Config, types::GenerationError};

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// Implementing this trait allows different generation providers to be used
/// with digest-bot, and lets tests substitute a mock for the live endpoint.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Generate the digest text for the given prompt.
    ///
    /// Returns the first candidate's text, or a [`GenerationError`] describing
    /// why no text could be extracted. No retry is attempted; one prompt, one
    /// request, one response.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    /// Creates a client backed by the Gemini `generateContent` API.
    pub fn gemini(config: &Config) -> Self {
        let client = GeminiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }

    /// Wraps any [`GenericLlmClient`] implementation.
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}

// Wire types.

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    /// The whole prompt travels as a single content part.
    fn single_part(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt.to_string() }],
            }],
        }
    }
}

// Every field of the response is optional on the wire; a response that
// deserializes but is missing any of them is malformed, not a transport
// failure.

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extract `candidates[0].content.parts[0].text`, the only part of the
    /// response this system consumes.
    fn first_candidate_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
    }
}

// Specific implementations.

/// Gemini LLM client implementation.
#[derive(Clone)]
pub struct GeminiLlmClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiLlmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.gemini_endpoint.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    fn url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl GenericLlmClient for GeminiLlmClient {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!("Requesting digest text from Gemini");

        let request = GenerateContentRequest::single_part(prompt);

        let response = self
            .http
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        // A body that is not JSON at all is a transport-level failure; a JSON
        // body without the expected candidate path is a malformed response.
        let body: GenerateContentResponse = response.json().await?;

        body.first_candidate_text().ok_or(GenerationError::MalformedResponse)
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, method, path, query_param},
    };

    use super::*;
    use crate::base::config::ConfigInner;

    fn test_config(endpoint: &str) -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                gemini_api_key: "test-key".to_string(),
                gemini_model: "gemini-test".to_string(),
                gemini_endpoint: endpoint.to_string(),
                ..Default::default()
            }),
        }
    }

    #[tokio::test]
    async fn generate_extracts_the_first_candidate_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-test:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "Hello" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "Sample digest" }] } }]
            })))
            .mount(&server)
            .await;

        let client = GeminiLlmClient::new(&test_config(&server.uri()));
        let text = client.generate("Hello").await.unwrap();

        assert_eq!(text, "Sample digest");
    }

    #[tokio::test]
    async fn generate_treats_non_success_status_as_transport_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GeminiLlmClient::new(&test_config(&server.uri()));
        let error = client.generate("Hello").await.unwrap_err();

        assert!(matches!(error, GenerationError::Transport(_)));
    }

    #[tokio::test]
    async fn generate_treats_a_missing_candidates_key_as_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = GeminiLlmClient::new(&test_config(&server.uri()));
        let error = client.generate("Hello").await.unwrap_err();

        assert!(matches!(error, GenerationError::MalformedResponse));
    }

    #[tokio::test]
    async fn generate_treats_an_empty_candidate_as_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [] } }]
            })))
            .mount(&server)
            .await;

        let client = GeminiLlmClient::new(&test_config(&server.uri()));
        let error = client.generate("Hello").await.unwrap_err();

        assert!(matches!(error, GenerationError::MalformedResponse));
    }
}
