//! System clipboard access for copying the summary.

use arboard::Clipboard;
use parking_lot::Mutex;
use std::time::Duration;

use crate::error::ClipboardError;

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        Ok(Self { clipboard })
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(format!("Failed to set clipboard text: {}", e)))
    }

    /// Write text and keep serving it until another owner takes the
    /// selection or `hold` elapses. Blocks the calling thread.
    ///
    /// On X11 and Wayland the selection lives in the process that set it,
    /// so a short-lived process must stay up for a clipboard manager (or a
    /// paste) to pick the text up.
    #[cfg(target_os = "linux")]
    pub fn set_text_held(&mut self, text: &str, hold: Duration) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;
        use std::time::Instant;

        self.clipboard
            .set()
            .wait_until(Instant::now() + hold)
            .text(text.to_string())
            .map_err(|e| ClipboardError(format!("Failed to set clipboard text: {}", e)))
    }

    /// Other platforms keep clipboard contents after the writer exits.
    #[cfg(not(target_os = "linux"))]
    pub fn set_text_held(&mut self, text: &str, _hold: Duration) -> Result<(), ClipboardError> {
        self.set_text(text)
    }
}

/// Lazily opened, shareable clipboard.
///
/// Opening is deferred to the first write so a headless session without a
/// clipboard only fails when the user actually copies. The handler is kept
/// alive afterwards; on X11 the selection disappears when it is dropped.
#[derive(Default)]
pub struct SharedClipboard {
    inner: Mutex<Option<ClipboardHandler>>,
    hold: Option<Duration>,
}

impl SharedClipboard {
    /// Clipboard for a long-lived process that keeps the handler open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard for a process about to exit: each write blocks for up to
    /// `hold` so the contents outlive the process where that is needed.
    pub fn holding(hold: Duration) -> Self {
        Self {
            inner: Mutex::new(None),
            hold: Some(hold),
        }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }

    pub fn write(&self, text: &str) -> Result<(), ClipboardError> {
        let mut slot = self.inner.lock();
        if slot.is_none() {
            *slot = Some(ClipboardHandler::new()?);
        }
        match (slot.as_mut(), self.hold) {
            (Some(handler), Some(hold)) => handler.set_text_held(text, hold),
            (Some(handler), None) => handler.set_text(text),
            (None, _) => Err(ClipboardError("clipboard unavailable".to_string())),
        }
    }
}
