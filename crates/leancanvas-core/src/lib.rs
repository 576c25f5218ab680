//! Lean Canvas feedback core.
//!
//! Collects the nine Lean Canvas sections, turns them into an evaluation
//! prompt and asks a locally hosted model-serving endpoint for feedback:
//!
//! - [`CanvasInput`]: the in-memory form snapshot (placeholders by default)
//! - [`build_prompt`]: fixed Korean rubric + the nine values
//! - [`FeedbackRequester`]: one POST per trigger, one feedback-log line per attempt
//! - [`report`]: terminal rendering of scores and feedback
//!
//! # Quick Start
//!
//! ```no_run
//! use leancanvas_core::{CanvasInput, CanvasSection, FeedbackConfig, FeedbackRequester};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let requester = FeedbackRequester::new(&FeedbackConfig::from_env())?;
//!
//! let mut canvas = CanvasInput::default();
//! canvas.set(CanvasSection::Problem, "1인 가구는 장보기 양을 맞추기 어렵다");
//!
//! let outcome = requester.submit(&canvas).await;
//! println!("{}", leancanvas_core::report::format_outcome(&outcome));
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `LEANCANVAS_ENDPOINT` | Generate endpoint (default: `http://localhost:11434/api/generate`) |
//! | `LEANCANVAS_MODEL` | Model identifier (default: `llama3.1:latest`) |
//! | `LEANCANVAS_TIMEOUT` | Request timeout in seconds (default: none) |
//! | `LEANCANVAS_LOG` | Feedback log path (default: `lean_canvas.log`) |

pub mod canvas;
pub mod client;
pub mod config;
pub mod error;
pub mod log;
pub mod prompt;
pub mod report;
pub mod requester;
pub mod types;

pub use canvas::{CanvasInput, CanvasSection};
pub use client::{HttpModelClient, ModelClient};
pub use config::FeedbackConfig;
pub use error::{FeedbackError, FeedbackResult};
pub use log::{FeedbackLog, LogLevel};
pub use prompt::build_prompt;
pub use requester::{failure_message, FeedbackOutcome, FeedbackRequester, ERROR_PREFIX};
pub use types::{FeedbackResponse, GenerateRequest, ScoreRow, FALLBACK_FEEDBACK};
