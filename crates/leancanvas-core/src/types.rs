//! Wire types for the model-serving endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{FeedbackError, FeedbackResult};

/// Shown in place of feedback when the body has no usable `response`.
pub const FALLBACK_FEEDBACK: &str = "AI 피드백을 가져오는 데 실패했습니다.";

/// Body of `POST {endpoint}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Target model identifier (e.g., "llama3.1:latest").
    pub model: String,

    /// Full evaluation prompt.
    pub prompt: String,

    /// Always false: the whole answer comes back in one body.
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// One row of the score table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub category: String,
    pub score: f64,
}

/// Feedback text plus whatever scores the endpoint chose to send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,

    /// In the order the endpoint listed them; empty when absent.
    #[serde(default)]
    pub scores: Vec<ScoreRow>,
}

impl FeedbackResponse {
    /// Interpret a response body. The body itself must be a JSON object;
    /// inside it, missing or mistyped fields degrade to the fallback message
    /// and an empty table.
    ///
    /// `scores` is untrusted. A non-object value is treated as absent and
    /// entries whose value is not a JSON number are dropped. Ranges are not
    /// checked.
    pub fn from_body(body: &Value) -> FeedbackResult<Self> {
        if !body.is_object() {
            return Err(FeedbackError::InvalidResponse {
                message: "response body is not a JSON object".to_string(),
            });
        }

        let feedback = body
            .get("response")
            .and_then(Value::as_str)
            .unwrap_or(FALLBACK_FEEDBACK)
            .to_string();

        let scores = body
            .get("scores")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(category, v)| {
                        v.as_f64().map(|score| ScoreRow {
                            category: category.clone(),
                            score,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { feedback, scores })
    }

    pub fn score(&self, category: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|row| row.category == category)
            .map(|row| row.score)
    }
}
