//! Headless one-shot mode: summarize text from stdin or a file and print it.

use parking_lot::Mutex;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use crate::clipboard::SharedClipboard;
use crate::controller::{CopyOutcome, SubmitOutcome, SummarizeController};
use crate::error::{ClipboardError, SummarizeError};
use crate::host::{CopyFeedback, DelayedCallback, DelayedTask, HostSurface, Notice};
use crate::service::SummaryService;

/// Longest `--copy` keeps the process alive to serve the clipboard where
/// the platform drops the selection with its owner.
pub const CLIPBOARD_HOLD: Duration = Duration::from_secs(30);

/// [`HostSurface`] over stdout/stderr.
///
/// Showing the result writes the summary to the output; progress and
/// notices go to stderr.
pub struct ConsoleHost {
    input: String,
    result_text: Mutex<String>,
    out: Mutex<Box<dyn Write + Send>>,
    clipboard: SharedClipboard,
    show_progress: bool,
}

impl ConsoleHost {
    pub fn new(input: String) -> Self {
        Self::with_output(input, Box::new(io::stdout()))
    }

    pub fn with_output(input: String, out: Box<dyn Write + Send>) -> Self {
        Self {
            input,
            result_text: Mutex::new(String::new()),
            out: Mutex::new(out),
            clipboard: SharedClipboard::holding(CLIPBOARD_HOLD),
            show_progress: io::stderr().is_terminal(),
        }
    }
}

impl HostSurface for ConsoleHost {
    fn read_input(&self) -> String {
        self.input.clone()
    }

    fn set_loading(&self, loading: bool) {
        if self.show_progress {
            let mut stderr = io::stderr();
            let _ = if loading {
                write!(stderr, "Summarizing...")
            } else {
                write!(stderr, "\r\x1b[2K")
            };
            let _ = stderr.flush();
        }
    }

    fn show_result(&self, visible: bool) {
        if !visible {
            return;
        }
        let text = self.result_text.lock().clone();
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::warn!(error = %err, "Failed to write summary");
        }
    }

    fn set_result_text(&self, text: &str) {
        *self.result_text.lock() = text.to_string();
    }

    fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        if cfg!(target_os = "linux") && self.show_progress {
            eprintln!(
                "Holding clipboard for up to {}s (Ctrl+C to stop)...",
                CLIPBOARD_HOLD.as_secs()
            );
        }
        self.clipboard.write(text)
    }

    fn set_copy_feedback(&self, feedback: CopyFeedback) {
        if feedback == CopyFeedback::Copied {
            eprintln!("Copied to clipboard.");
        }
    }

    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice);
    }

    fn schedule_delayed(&self, delay: Duration, callback: DelayedCallback) -> DelayedTask {
        DelayedTask::spawn_tokio(delay, callback)
    }
}

/// Run one summarize cycle over `input` against stdout.
pub async fn run<S: SummaryService>(
    service: Arc<S>,
    input: String,
    copy: bool,
) -> Result<String, SummarizeError> {
    run_with_host(service, Arc::new(ConsoleHost::new(input)), copy).await
}

/// Run one summarize cycle through `host`; optionally copy the result.
///
/// The summary is written out before the copy starts. Errors are reported
/// through the host's notice channel and returned so the caller can pick
/// an exit code. A clipboard failure does not discard the summary.
pub async fn run_with_host<S: SummaryService>(
    service: Arc<S>,
    host: Arc<ConsoleHost>,
    copy: bool,
) -> Result<String, SummarizeError> {
    let controller = SummarizeController::new(service, Arc::clone(&host));

    let raw = host.read_input();
    let summary = match controller.submit_summarize(&raw).await {
        Ok(SubmitOutcome::Displayed(summary)) => summary,
        // A fresh controller has nothing in flight.
        Ok(SubmitOutcome::Ignored) => String::new(),
        Err(err) => {
            tracing::warn!(error = %err, "Summarize failed");
            host.notify(err.notice());
            return Err(err);
        }
    };

    if copy {
        match controller.copy_result() {
            Ok(CopyOutcome::Copied) | Ok(CopyOutcome::NothingToCopy) => {}
            Err(err) => host.notify(err.notice()),
        }
    }

    Ok(summary)
}
