//! Shared argument types used across multiple commands.

use clap::ValueEnum;
use leancanvas_core::FeedbackConfig;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where to send the canvas. Unset flags fall back to the built-in defaults
/// (`http://localhost:11434/api/generate`, `llama3.1:latest`, no timeout,
/// `lean_canvas.log`).
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EndpointArgs {
    /// Model-serving generate endpoint
    #[arg(long, env = "LEANCANVAS_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Model identifier sent with the request
    #[arg(long, env = "LEANCANVAS_MODEL")]
    pub model: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, env = "LEANCANVAS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Append-only feedback log
    #[arg(long = "log-file", env = "LEANCANVAS_LOG")]
    pub log_file: Option<PathBuf>,
}

impl EndpointArgs {
    pub fn to_config(&self) -> FeedbackConfig {
        let mut cfg = FeedbackConfig::default();
        if let Some(endpoint) = &self.endpoint {
            cfg = cfg.with_endpoint(endpoint.clone());
        }
        if let Some(model) = &self.model {
            cfg = cfg.with_model(model.clone());
        }
        if let Some(log_file) = &self.log_file {
            cfg = cfg.with_log_path(log_file.clone());
        }
        cfg.with_timeout_secs(self.timeout)
    }
}
