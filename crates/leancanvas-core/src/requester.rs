//! Feedback requester: canvas → prompt → one POST → feedback + scores.
//!
//! Each call is independent: a fresh request id, a fresh request body, and
//! exactly one feedback-log line. Nothing is retried or cached.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use crate::canvas::CanvasInput;
use crate::client::{HttpModelClient, ModelClient};
use crate::config::FeedbackConfig;
use crate::error::FeedbackResult;
use crate::log::FeedbackLog;
use crate::prompt::build_prompt;
use crate::types::{FeedbackResponse, GenerateRequest, ScoreRow};

/// Prefix of the message shown in place of feedback when a request fails.
pub const ERROR_PREFIX: &str = "오류 발생";

/// What the user sees after one trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedbackOutcome {
    Success {
        request_id: String,
        #[serde(flatten)]
        response: FeedbackResponse,
    },
    Failed {
        request_id: String,
        message: String,
    },
}

impl FeedbackOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn request_id(&self) -> &str {
        match self {
            Self::Success { request_id, .. } | Self::Failed { request_id, .. } => request_id,
        }
    }

    /// Feedback text, or the failure message.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { response, .. } => &response.feedback,
            Self::Failed { message, .. } => message,
        }
    }

    /// Score rows; always empty for a failed request.
    pub fn scores(&self) -> &[ScoreRow] {
        match self {
            Self::Success { response, .. } => &response.scores,
            Self::Failed { .. } => &[],
        }
    }
}

#[derive(Clone)]
pub struct FeedbackRequester {
    client: Arc<dyn ModelClient>,
    model: String,
    log: FeedbackLog,
}

impl FeedbackRequester {
    pub fn new(config: &FeedbackConfig) -> FeedbackResult<Self> {
        let client = HttpModelClient::new(config)?;
        Ok(Self::with_client(
            Arc::new(client),
            config.model.clone(),
            FeedbackLog::new(config.log_path.clone()),
        ))
    }

    pub fn with_client(
        client: Arc<dyn ModelClient>,
        model: impl Into<String>,
        log: FeedbackLog,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            log,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn log(&self) -> &FeedbackLog {
        &self.log
    }

    pub fn build_request(&self, canvas: &CanvasInput) -> GenerateRequest {
        GenerateRequest::new(self.model.clone(), build_prompt(canvas))
    }

    /// Send the canvas for evaluation.
    ///
    /// Appends one line to the feedback log whether the call succeeds or not.
    pub async fn request_feedback(&self, canvas: &CanvasInput) -> FeedbackResult<FeedbackResponse> {
        let request_id = Uuid::new_v4().to_string();
        self.request_with_id(&request_id, canvas).await
    }

    /// Like [`request_feedback`](Self::request_feedback), but never fails:
    /// errors become the displayed `오류 발생: ...` message.
    pub async fn submit(&self, canvas: &CanvasInput) -> FeedbackOutcome {
        let request_id = Uuid::new_v4().to_string();
        match self.request_with_id(&request_id, canvas).await {
            Ok(response) => FeedbackOutcome::Success {
                request_id,
                response,
            },
            Err(e) => FeedbackOutcome::Failed {
                request_id,
                message: failure_message(&e),
            },
        }
    }

    async fn request_with_id(
        &self,
        request_id: &str,
        canvas: &CanvasInput,
    ) -> FeedbackResult<FeedbackResponse> {
        let span = tracing::info_span!(
            "feedback_request",
            request_id = %request_id,
            model = %self.model,
            endpoint = %self.client.endpoint(),
        );

        async move {
            let request = self.build_request(canvas);
            info!("API 요청 시작");
            if tracing::enabled!(tracing::Level::DEBUG) {
                match serde_json::to_string_pretty(&request) {
                    Ok(payload) => debug!("Payload: {}", payload),
                    Err(e) => debug!(error = %e, "payload not serializable"),
                }
            }

            let result = self
                .client
                .generate(&request)
                .await
                .and_then(|body| FeedbackResponse::from_body(&body));

            let log_result = match &result {
                Ok(response) => {
                    info!(scores = response.scores.len(), "feedback received");
                    self.log.info(&format!(
                        "피드백 수신 완료 (model={}, scores={}) [request_id={}]",
                        self.model,
                        response.scores.len(),
                        request_id
                    ))
                }
                Err(e) => {
                    warn!(error = %e, "feedback request failed");
                    self.log
                        .error(&format!("{} [request_id={}]", failure_message(e), request_id))
                }
            };
            if let Err(e) = log_result {
                warn!(
                    error = %e,
                    path = %self.log.path().display(),
                    "could not append to feedback log"
                );
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Text shown in place of feedback for a failed request.
pub fn failure_message(err: &crate::error::FeedbackError) -> String {
    format!("{}: {}", ERROR_PREFIX, err)
}
