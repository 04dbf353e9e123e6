//! Blocking client for the Gemini `generateContent` endpoint.

use crate::error::GeminiError;
use crate::prompts::audit_prompt;
use deck_core::analysis::corpus_prompt_body;
use deck_core::{AnalysisResult, Analyzer, Corpus, Settings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public Gemini REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Build from run settings. The credential must already be validated.
    pub fn from_settings(settings: &Settings, api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: settings.model.clone(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(settings.timeout_secs),
        }
    }

    /// Point at a different API root (proxies, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
    #[serde(default)]
    finish_reason: Option<String>,
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
    /// Concatenated text of the first candidate.
    fn into_text(self) -> Result<String, GeminiError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .map(|f| f.to_string())
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(GeminiError::EmptyResponse(reason));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyResponse(
                candidate
                    .finish_reason
                    .unwrap_or_else(|| "no text".to_string()),
            ));
        }
        Ok(text)
    }
}

/// Sends a corpus to Gemini and parses the verdict.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    /// Set up the HTTP client for one request.
    fn configure(&self) -> Result<reqwest::blocking::Client, GeminiError> {
        if self.config.api_key.trim().is_empty() {
            return Err(GeminiError::Config("API key is empty".to_string()));
        }
        reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| GeminiError::Config(e.to_string()))
    }

    /// Build the `generateContent` request. The key travels in a header so
    /// the URL can be logged.
    fn request(
        &self,
        http: &reqwest::blocking::Client,
        prompt: &str,
    ) -> reqwest::blocking::RequestBuilder {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        http.post(self.config.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
    }

    /// Send one prompt and return the model's raw text.
    pub fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let http = self.configure()?;

        log::debug!(
            "POST {} ({} prompt bytes)",
            self.config.url(),
            prompt.len()
        );
        let response = self.request(&http, prompt).send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(GeminiError::Status {
                status: status.as_u16(),
                message: api_error_message(&message),
            });
        }

        response.json::<GenerateContentResponse>()?.into_text()
    }
}

impl Analyzer for GeminiClient {
    fn analyze(&self, corpus: &Corpus) -> AnalysisResult {
        let prompt = audit_prompt(&corpus_prompt_body(corpus));
        match self.generate(&prompt) {
            Ok(text) => AnalysisResult::from_model_text(&text),
            Err(e) => {
                log::warn!("Analysis request failed: {}", e);
                AnalysisResult::failure(e.to_string())
            }
        }
    }
}

/// Pull `error.message` out of an API error body, falling back to the body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<String, GeminiError> {
        serde_json::from_value::<GenerateContentResponse>(value)
            .unwrap()
            .into_text()
    }

    fn config() -> GeminiConfig {
        GeminiConfig::from_settings(&Settings::default(), "key")
    }

    #[test]
    fn test_url() {
        assert_eq!(
            config().with_endpoint("http://localhost:9/v1/").url(),
            "http://localhost:9/v1/models/gemini-1.5-flash-latest:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"contents": [{"parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_key_sent_in_header_not_url() {
        let client = GeminiClient::new(config());
        let http = client.configure().unwrap();
        let request = client.request(&http, "hi").build().unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(request.url().query(), None);
        assert!(!request.url().as_str().contains("key"));
        assert_eq!(request.headers()["x-goog-api-key"], "key");
        assert_eq!(request.headers()["content-type"], "application/json");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let text = parse(json!({
            "candidates": [{
                "content": {"parts": [{"text": "```json\n{\"issues\""}, {"text": ": []}\n```"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(
            AnalysisResult::from_model_text(&text),
            AnalysisResult::success(vec![])
        );
    }

    #[test]
    fn test_blocked_prompt() {
        let err = parse(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse(ref r) if r.contains("SAFETY")));
    }

    #[test]
    fn test_candidate_without_text() {
        let err = parse(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]})).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_api_error_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(api_error_message(body), "API key not valid.");
        assert_eq!(api_error_message("  Bad Gateway "), "Bad Gateway");
    }

    #[test]
    fn test_empty_key_is_configuration_failure() {
        let mut cfg = config();
        cfg.api_key = String::new();
        let corpus: Corpus = vec!["x".to_string()].into_iter().collect();

        let result = GeminiClient::new(cfg).analyze(&corpus);
        assert!(matches!(
            result,
            AnalysisResult::Failure { ref message } if message.starts_with("Failed to configure Gemini API")
        ));
    }

    #[test]
    fn test_unreachable_service_is_failure_result() {
        let cfg = config().with_endpoint("http://127.0.0.1:9");
        let corpus: Corpus = vec!["x".to_string()].into_iter().collect();

        let result = GeminiClient::new(cfg).analyze(&corpus);
        assert!(matches!(
            result,
            AnalysisResult::Failure { ref message } if message.starts_with("An error occurred during the Gemini API call")
        ));
    }
}
