//! Gemini API Client
//!
//! HTTP client for the `generateContent` endpoint with structured JSON output.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::prompt::{response_schema, ExplanationRequest};
use super::provider::{ExplainError, ExplanationProvider};
use super::types::ExplanationResult;
use crate::logic::config::AppConfig;
use crate::logic::features::FeatureRecord;

/// Gemini client configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl From<&AppConfig> for GeminiConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            timeout_seconds: config.timeout_secs,
        }
    }
}

/// Gemini API client
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: reqwest::Client,
}

// Request/Response types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentRequest {
    pub fn for_explanation(request: &ExplanationRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![RequestPart { text: request.prompt() }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() { None } else { Some(text) }
    }
}

impl GeminiClient {
    /// Create new Gemini client
    pub fn new(config: GeminiConfig) -> Result<Self, ExplainError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ExplainError::ClientSetup(e.to_string()))?;

        Ok(Self { config, http_client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Single generateContent call, no retry
    pub async fn generate(&self, request: &ExplanationRequest) -> Result<ExplanationResult, ExplainError> {
        let api_key = self.config.api_key.as_ref()
            .ok_or(ExplainError::MissingApiKey)?;

        let body = GenerateContentRequest::for_explanation(request);
        log::debug!("Explanation prompt:\n{}", body.contents[0].parts[0].text);

        let response = self.http_client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExplainError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ExplainError::Server { status, body: error_text });
        }

        let payload: GenerateContentResponse = response.json().await
            .map_err(|e| ExplainError::Malformed(e.to_string()))?;

        let text = payload.text().ok_or(ExplainError::EmptyResponse)?;
        parse_explanation(&text)
    }
}

#[async_trait]
impl ExplanationProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn explain(
        &self,
        features: &FeatureRecord,
        hybrid_score: f64,
    ) -> Result<ExplanationResult, ExplainError> {
        self.generate(&ExplanationRequest::new(features, hybrid_score)).await
    }
}

/// Parse the model's text output as an ExplanationResult
pub fn parse_explanation(text: &str) -> Result<ExplanationResult, ExplainError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ExplainError::EmptyResponse);
    }
    serde_json::from_str(text).map_err(|e| ExplainError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const GOOD_TEXT: &str = r#"{"analysis":"Elevated glucose and BMI drive a high risk profile. Immediate follow-up is advised.","recommendations":["a","b","c","d"],"topFactors":["Glucose","BMI","Age"]}"#;

    fn config(api_base: String, api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_base,
            model: "test-model".to_string(),
            api_key: api_key.map(str::to_string),
            timeout_seconds: 5,
        }
    }

    fn envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    /// Serve one canned HTTP response, hand back the raw request
    async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];

            // Headers, then Content-Length bytes of body
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            if name.eq_ignore_ascii_case("content-length") {
                                value.trim().parse::<usize>().ok()
                            } else {
                                None
                            }
                        })
                        .unwrap_or(0);
                    if raw.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).to_string()
        });

        (base, handle)
    }

    fn request() -> ExplanationRequest {
        ExplanationRequest::new(&FeatureRecord::default(), 0.42)
    }

    #[tokio::test]
    async fn test_successful_generate() {
        let (base, server) = serve_once("200 OK", envelope(GOOD_TEXT)).await;
        let client = GeminiClient::new(config(base, Some("test-key"))).unwrap();

        let result = client.generate(&request()).await.unwrap();
        assert_eq!(result.top_factors, vec!["Glucose", "BMI", "Age"]);
        assert_eq!(result.recommendations.len(), 4);

        let raw = server.await.unwrap();
        let lower = raw.to_lowercase();
        assert!(raw.starts_with("POST /models/test-model:generateContent"));
        assert!(lower.contains("x-goog-api-key: test-key"));
        assert!(raw.contains(r#""responseMimeType":"application/json""#));
        assert!(raw.contains("Hybrid ML Consensus Score: 42.0%"));
    }

    #[tokio::test]
    async fn test_missing_field_is_malformed() {
        let text = r#"{"analysis":"x","recommendations":["a"]}"#;
        let (base, _server) = serve_once("200 OK", envelope(text)).await;
        let client = GeminiClient::new(config(base, Some("k"))).unwrap();

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, ExplainError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_response() {
        let (base, _server) = serve_once("200 OK", r#"{"candidates":[]}"#.to_string()).await;
        let client = GeminiClient::new(config(base, Some("k"))).unwrap();

        assert_eq!(client.generate(&request()).await, Err(ExplainError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let body = r#"{"error":{"message":"API key not valid"}}"#.to_string();
        let (base, _server) = serve_once("400 Bad Request", body).await;
        let client = GeminiClient::new(config(base, Some("bad"))).unwrap();

        match client.generate(&request()).await {
            Err(ExplainError::Server { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("API key not valid"));
            }
            other => panic!("expected server error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = GeminiClient::new(config(base, Some("k"))).unwrap();
        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, ExplainError::Network(_)));
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        // Không có server nào - lỗi phải xảy ra trước network call
        let client = GeminiClient::new(config("http://127.0.0.1:1".to_string(), None)).unwrap();
        assert_eq!(client.generate(&request()).await, Err(ExplainError::MissingApiKey));
    }

    #[test]
    fn test_parse_explanation() {
        assert!(parse_explanation(GOOD_TEXT).is_ok());
        assert_eq!(parse_explanation("   "), Err(ExplainError::EmptyResponse));
        assert!(matches!(parse_explanation("not json"), Err(ExplainError::Malformed(_))));
        assert!(matches!(
            parse_explanation(r#"{"analysis":1,"recommendations":[],"topFactors":[]}"#),
            Err(ExplainError::Malformed(_))
        ));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let payload: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(payload.text().as_deref(), Some(r#"{"a":1}"#));
    }
}
