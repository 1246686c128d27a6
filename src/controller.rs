//! The summarize/copy interaction lifecycle.
//!
//! ```text
//! Idle ──submit──→ Validating ──fail──→ Idle (notice)
//!                      │
//!                      └──pass──→ Loading ──fail──→ Idle (notice)
//!                                    │
//!                                    └──ok──→ Displaying ──→ Idle
//! ```
//!
//! The loading flag is acquired right before the service call and released
//! by a scope guard, so every exit path (error, panic, or the submit future
//! being dropped) leaves the UI idle again.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::{ClipboardError, SummarizeError};
use crate::host::{CopyFeedback, DelayedTask, HostSurface, COPY_FEEDBACK_DELAY};
use crate::input::validate_input;
use crate::service::SummaryService;

/// Observable phase of the summarize cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Displaying,
}

/// Result of a submit that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Summary received and shown.
    Displayed(String),
    /// A request was already in flight; nothing was done.
    Ignored,
}

/// Result of a copy that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// No summary yet; the clipboard was not touched.
    NothingToCopy,
}

#[derive(Debug, Default)]
struct ControllerState {
    loading: bool,
    result_visible: bool,
    summary: Option<String>,
    pending_revert: Option<DelayedTask>,
}

/// Orchestrates one summarize-and-display cycle and one copy cycle.
///
/// Cloning yields another handle onto the same state, which is how the UI
/// spawns a submit while keeping the controller for copy triggers.
pub struct SummarizeController<S, H> {
    service: Arc<S>,
    host: Arc<H>,
    state: Arc<Mutex<ControllerState>>,
}

impl<S, H> Clone for SummarizeController<S, H> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            host: Arc::clone(&self.host),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: SummaryService, H: HostSurface> SummarizeController<S, H> {
    pub fn new(service: Arc<S>, host: Arc<H>) -> Self {
        Self {
            service,
            host,
            state: Arc::new(Mutex::new(ControllerState::default())),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Last summary received, if any. Survives later failures.
    pub fn summary(&self) -> Option<String> {
        self.state.lock().summary.clone()
    }

    pub fn phase(&self) -> Phase {
        let state = self.state.lock();
        if state.loading {
            Phase::Loading
        } else if state.result_visible {
            Phase::Displaying
        } else {
            Phase::Idle
        }
    }

    /// Validate `raw_text`, call the service once, and display the result.
    ///
    /// Returns [`SubmitOutcome::Ignored`] without side effects when another
    /// submit is still in flight.
    pub async fn submit_summarize(&self, raw_text: &str) -> Result<SubmitOutcome, SummarizeError> {
        let text = validate_input(raw_text)?;

        {
            let mut state = self.state.lock();
            if state.loading {
                tracing::debug!("Submit ignored: request already in flight");
                return Ok(SubmitOutcome::Ignored);
            }
            state.loading = true;
            state.result_visible = false;
        }
        self.host.set_loading(true);
        self.host.show_result(false);

        let _loading = scopeguard::guard((), |_| {
            self.state.lock().loading = false;
            self.host.set_loading(false);
        });

        tracing::debug!(chars = text.chars().count(), "Summarize started");
        let summary = self.service.summarize(text).await?;

        {
            let mut state = self.state.lock();
            state.summary = Some(summary.clone());
            state.result_visible = true;
        }
        self.host.set_result_text(&summary);
        self.host.show_result(true);
        tracing::info!(summary_len = summary.len(), "Summary displayed");

        Ok(SubmitOutcome::Displayed(summary))
    }

    /// Copy the current summary to the clipboard and flash the acknowledgment.
    pub fn copy_result(&self) -> Result<CopyOutcome, SummarizeError> {
        let summary = match self.state.lock().summary.clone() {
            Some(summary) if !summary.is_empty() => summary,
            _ => return Ok(CopyOutcome::NothingToCopy),
        };

        self.host
            .write_clipboard(&summary)
            .map_err(|ClipboardError(reason)| {
                tracing::error!(reason = %reason, "Clipboard write failed");
                ClipboardError(reason)
            })?;

        let previous = self.state.lock().pending_revert.take();
        if let Some(previous) = previous {
            previous.cancel();
        }
        self.host.set_copy_feedback(CopyFeedback::Copied);

        let host = Arc::clone(&self.host);
        let revert = self.host.schedule_delayed(
            COPY_FEEDBACK_DELAY,
            Box::new(move || host.set_copy_feedback(CopyFeedback::Idle)),
        );
        self.state.lock().pending_revert = Some(revert);

        Ok(CopyOutcome::Copied)
    }

    /// Primary trigger: summarize whatever the host's input currently holds.
    ///
    /// Errors are converted to a notice and never returned.
    pub async fn on_submit_trigger(&self) {
        let raw = self.host.read_input();
        match self.submit_summarize(&raw).await {
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(error = %err, "Summarize failed");
                self.host.notify(err.notice());
            }
        }
    }

    /// Secondary trigger: copy the displayed summary.
    pub fn on_copy_trigger(&self) {
        match self.copy_result() {
            Ok(CopyOutcome::Copied) => tracing::debug!("Summary copied"),
            Ok(CopyOutcome::NothingToCopy) => {}
            Err(err) => self.host.notify(err.notice()),
        }
    }
}
