//! In-memory form state for one interactive session.
//!
//! idle → requesting → (success | failed) → idle. The canvas is never touched
//! by a request; only the last outcome is replaced.

use leancanvas_core::{CanvasInput, CanvasSection, FeedbackOutcome, FeedbackRequester};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequestState {
    Idle,
    Requesting,
}

pub(crate) struct FormSession {
    canvas: CanvasInput,
    requester: FeedbackRequester,
    state: RequestState,
    last: Option<FeedbackOutcome>,
    attempts: u32,
}

impl FormSession {
    pub(crate) fn new(canvas: CanvasInput, requester: FeedbackRequester) -> Self {
        Self {
            canvas,
            requester,
            state: RequestState::Idle,
            last: None,
            attempts: 0,
        }
    }

    pub(crate) fn canvas(&self) -> &CanvasInput {
        &self.canvas
    }

    pub(crate) fn edit(&mut self, section: CanvasSection, value: String) {
        self.canvas.set(section, value);
    }

    pub(crate) fn state(&self) -> RequestState {
        self.state
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.attempts
    }

    pub(crate) fn last_outcome(&self) -> Option<&FeedbackOutcome> {
        self.last.as_ref()
    }

    /// Submit the current canvas. Waits for the endpoint; failures come back
    /// as a displayable outcome, never as an error.
    pub(crate) async fn trigger(&mut self) -> &FeedbackOutcome {
        self.state = RequestState::Requesting;
        let outcome = self.requester.submit(&self.canvas).await;
        self.state = RequestState::Idle;
        self.attempts += 1;
        tracing::debug!(
            attempt = self.attempts,
            success = outcome.is_success(),
            "feedback attempt finished"
        );
        &*self.last.insert(outcome)
    }
}
