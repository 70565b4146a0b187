// Classification Client Service
// Single-shot HTTP transport to the remote claim-classification service

use std::env;
use std::time::{Duration, Instant};

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::{ClaimRequest, ClassificationResult};

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error: {status}")]
    Service { status: u16, detail: Option<String> },
    #[error("JSON parse error: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load client config from environment, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let base_url = env::var("CLAIMLENS_API_URL")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("CLAIMLENS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }
}

pub struct ClassifyClient {
    client: Client,
    base_url: String,
}

impl ClassifyClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClassifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// For testing: point the client at a specific base URL (e.g., wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Send one classification request. Exactly one network call, no retry.
    pub async fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifyError> {
        let request = ClaimRequest {
            text: text.to_string(),
        };

        let start = Instant::now();

        let response = self
            .client
            .post(format!("{}/classify", self.base_url))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let round_trip_ms = start.elapsed().as_millis() as i64;
        let status = response.status();
        debug!(status = status.as_u16(), round_trip_ms, "classify.response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Service {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        response
            .json::<ClassificationResult>()
            .await
            .map_err(|e| ClassifyError::MalformedResponse(e.to_string()))
    }
}

/// Pull a non-empty `detail` string out of an error body, if the body is
/// JSON and carries one. Anything else (unparseable body, missing field,
/// non-string detail such as a validation error list) yields None.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> ClassifyClient {
        ClassifyClient::new(&ClientConfig {
            base_url: "http://localhost".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail": "model unavailable"}"#),
            Some("model unavailable".to_string())
        );
        assert_eq!(extract_detail(r#"{"detail": ""}"#), None);
        assert_eq!(extract_detail(r#"{"detail": [{"loc": ["text"]}]}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(""), None);
    }

    #[tokio::test]
    async fn test_classify_success() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "label": "fake",
            "confidence": 0.87,
            "reasons": ["sensational claim"],
            "highlights": [
                {"token": "dry", "score": -0.6},
                {"token": "water", "score": 0.1}
            ],
            "model_version": "v1",
            "latency_ms": 42
        });

        Mock::given(method("POST"))
            .and(path("/classify"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(
                serde_json::json!({"text": "Scientists confirm water is dry"}),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client().with_base_url(&server.uri());
        let result = client
            .classify("Scientists confirm water is dry")
            .await
            .unwrap();

        assert_eq!(result.label, Label::Fake);
        assert_eq!(result.confidence, 0.87);
        assert_eq!(result.reasons, vec!["sensational claim"]);
        assert_eq!(result.highlights.len(), 2);
        assert_eq!(result.model_version, "v1");
        assert_eq!(result.latency_ms, 42);
    }

    #[tokio::test]
    async fn test_classify_service_error_with_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"detail": "model unavailable"})),
            )
            .mount(&server)
            .await;

        let client = test_client().with_base_url(&server.uri());
        let err = client.classify("some claim").await.unwrap_err();

        match err {
            ClassifyError::Service { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail.as_deref(), Some("model unavailable"));
            }
            other => panic!("expected Service error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_classify_service_error_unparseable_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
            .mount(&server)
            .await;

        let client = test_client().with_base_url(&server.uri());
        let err = client.classify("some claim").await.unwrap_err();

        match err {
            ClassifyError::Service { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, None);
            }
            other => panic!("expected Service error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_classify_malformed_success_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let client = test_client().with_base_url(&server.uri());
        let err = client.classify("some claim").await.unwrap_err();
        assert!(matches!(err, ClassifyError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_classify_tolerates_missing_optional_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"label": "satire", "confidence": 0.4})),
            )
            .mount(&server)
            .await;

        let client = test_client().with_base_url(&server.uri());
        let result = client.classify("some claim").await.unwrap();

        assert_eq!(result.label, Label::Other("satire".to_string()));
        assert!(result.highlights.is_empty());
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_config_from_env_defaults() {
        std::env::remove_var("CLAIMLENS_API_URL");
        std::env::remove_var("CLAIMLENS_TIMEOUT_SECS");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
