//! Host UI surface: the capabilities the controller drives but does not own.
//!
//! The terminal front end ([`crate::ui::TuiHost`]), the headless print mode
//! ([`crate::print::ConsoleHost`]) and test doubles all implement
//! [`HostSurface`].

use std::fmt;
use std::time::Duration;

use crate::error::ClipboardError;

/// How long the copy acknowledgment stays up before reverting.
pub const COPY_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

/// Presentation of the copy affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    /// Acknowledgment shown right after a successful copy.
    Copied,
}

impl CopyFeedback {
    pub fn label(self) -> &'static str {
        match self {
            CopyFeedback::Idle => "Copy",
            CopyFeedback::Copied => "Copied!",
        }
    }
}

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Alert-style notification surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Callback run once when a delayed task fires.
pub type DelayedCallback = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a scheduled one-shot callback.
///
/// Cancelling guarantees the callback will not run if it has not run yet.
/// Dropping the handle without cancelling leaves the callback scheduled.
pub struct DelayedTask {
    cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl DelayedTask {
    /// Wrap an arbitrary cancellation action.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Schedule `callback` on the current tokio runtime after `delay`.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn_tokio(delay: Duration, callback: DelayedCallback) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        Self::new(move || handle.abort())
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for DelayedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelayedTask")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Capabilities the controller needs from whatever is presenting it.
///
/// All methods take `&self`: implementations use interior mutability so a
/// single host can be shared between the UI loop and in-flight requests.
pub trait HostSurface: Send + Sync + 'static {
    /// Current contents of the text input.
    fn read_input(&self) -> String;

    /// Toggle the busy indicator and the submit affordance's enabled state.
    fn set_loading(&self, loading: bool);

    /// Show or hide the result panel.
    fn show_result(&self, visible: bool);

    /// Replace the text of the result display.
    fn set_result_text(&self, text: &str);

    /// Write `text` to the system clipboard.
    fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError>;

    /// Change the copy affordance's presentation.
    fn set_copy_feedback(&self, feedback: CopyFeedback);

    /// Surface an alert-style notification.
    fn notify(&self, notice: Notice);

    /// Run `callback` once after `delay`.
    fn schedule_delayed(&self, delay: Duration, callback: DelayedCallback) -> DelayedTask;
}
