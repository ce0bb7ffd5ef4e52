//! Gemini text generation provider.
//!
//! HTTP client for the Generative Language `generateContent` endpoint. One
//! request per call: no retry, backoff, or rate limiting.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unisql_core::config::ModelConfig;
use unisql_core::errors::GenerationError;
use unisql_core::traits::TextGenerator;

pub struct GeminiProvider {
    model: String,
    endpoint: String,
    api_key: String,
    timeout: Option<Duration>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiProvider {
    /// Create a provider. `endpoint` is the API base URL, without the
    /// `/models/...` suffix.
    pub fn new(
        model: String,
        api_key: String,
        endpoint: String,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            model,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
            timeout,
        }
    }

    /// Build a provider from the `[model]` config section. Fails when no API
    /// key is configured.
    pub fn from_config(config: &ModelConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GenerationError::MissingApiKey {
                provider: config.effective_name().to_string(),
            })?;
        Ok(Self::new(
            config.effective_name().to_string(),
            api_key,
            config.effective_endpoint().to_string(),
            config.timeout(),
        ))
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Send a single HTTP request on a current-thread runtime, blocking until
    /// the response arrives.
    fn send_request(&self, prompt: &str) -> Result<String, GenerationError> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GenerationError::Runtime {
                reason: e.to_string(),
            })?;

        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        rt.block_on(async {
            let client = reqwest::Client::new();
            let mut request = client
                .post(self.url())
                .header("x-goog-api-key", &self.api_key)
                .json(&body);
            if let Some(timeout) = self.timeout {
                request = request.timeout(timeout);
            }

            let response = request.send().await.map_err(|e| GenerationError::Http {
                reason: e.to_string(),
            })?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(GenerationError::Status { status, body });
            }

            let resp: GenerateResponse =
                response
                    .json()
                    .await
                    .map_err(|e| GenerationError::InvalidResponse {
                        reason: e.to_string(),
                    })?;

            response_text(resp)
        })
    }
}

/// Concatenate the text parts of the first candidate.
fn response_text(resp: GenerateResponse) -> Result<String, GenerationError> {
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::EmptyResponse)?;
    let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
    if parts.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(parts.into_iter().filter_map(|p| p.text).collect())
}

impl TextGenerator for GeminiProvider {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "sending generation request"
        );
        self.send_request(prompt)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let resp = parse(
            r#"{"candidates":[
                {"content":{"parts":[{"text":"```sql\n"},{"text":"SELECT 1;\n```"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        );
        assert_eq!(response_text(resp).unwrap(), "```sql\nSELECT 1;\n```");
    }

    #[test]
    fn no_candidates_is_an_error() {
        let resp = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert!(matches!(
            response_text(resp),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn candidate_without_content_is_an_error() {
        let resp = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert!(matches!(
            response_text(resp),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn from_config_requires_api_key() {
        let config = ModelConfig::default();
        assert!(matches!(
            GeminiProvider::from_config(&config),
            Err(GenerationError::MissingApiKey { .. })
        ));
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let provider = GeminiProvider::new(
            "gemini-2.0-flash".into(),
            "key".into(),
            "https://example.test/v1beta/".into(),
            None,
        );
        assert_eq!(
            provider.url(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }
}
