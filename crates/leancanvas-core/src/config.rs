//! Endpoint, model and log file settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FeedbackError, FeedbackResult};

/// Feedback client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Full URL of the generate endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds. `None` waits for as long as the endpoint takes.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Append-only feedback log.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_endpoint() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_model() -> String {
    "llama3.1:latest".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("lean_canvas.log")
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: None,
            log_path: default_log_path(),
        }
    }
}

impl FeedbackConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `LEANCANVAS_ENDPOINT` | Generate endpoint URL |
    /// | `LEANCANVAS_MODEL` | Model identifier |
    /// | `LEANCANVAS_TIMEOUT` | Request timeout in seconds |
    /// | `LEANCANVAS_LOG` | Feedback log path |
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("LEANCANVAS_ENDPOINT").unwrap_or_else(|_| default_endpoint()),
            model: std::env::var("LEANCANVAS_MODEL").unwrap_or_else(|_| default_model()),
            timeout_secs: std::env::var("LEANCANVAS_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok()),
            log_path: std::env::var("LEANCANVAS_LOG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_log_path()),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: Option<u64>) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }

    /// Reject settings that cannot produce a request at all.
    pub fn validate(&self) -> FeedbackResult<()> {
        if self.model.trim().is_empty() {
            return Err(FeedbackError::Config {
                message: "model identifier is empty".to_string(),
            });
        }
        let url = url::Url::parse(&self.endpoint).map_err(|e| FeedbackError::Config {
            message: format!("invalid endpoint '{}': {}", self.endpoint, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FeedbackError::Config {
                message: format!(
                    "endpoint '{}' must use http or https, not {}",
                    self.endpoint,
                    url.scheme()
                ),
            });
        }
        Ok(())
    }
}
