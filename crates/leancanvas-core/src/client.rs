//! HTTP client for the model-serving endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::config::FeedbackConfig;
use crate::error::{FeedbackError, FeedbackResult};
use crate::types::GenerateRequest;

const USER_AGENT_VALUE: &str = concat!("leancanvas/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a generate request into a JSON body.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> FeedbackResult<serde_json::Value>;

    fn endpoint(&self) -> &str;
}

/// Single-shot POST client. No retries.
#[derive(Debug, Clone)]
pub struct HttpModelClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpModelClient {
    pub fn new(config: &FeedbackConfig) -> FeedbackResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder().default_headers(default_headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| FeedbackError::Network {
            message: format!("failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn generate(&self, request: &GenerateRequest) -> FeedbackResult<serde_json::Value> {
        debug!(endpoint = %self.endpoint, model = %request.model, "posting generate request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        // The body is interpreted whatever the status; an error body simply
        // lacks a `response` field.
        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                endpoint = %self.endpoint,
                "endpoint returned non-success status"
            );
        }

        let text = response.text().await.map_err(|e| FeedbackError::Network {
            message: format!("failed to read response body: {}", e),
        })?;

        serde_json::from_str(&text).map_err(|e| FeedbackError::InvalidResponse {
            message: format!("response is not valid JSON: {}", e),
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
