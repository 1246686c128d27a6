//! [`HostSurface`] for the terminal UI.
//!
//! Every capability call becomes a [`PanelIntent`] on the shared model,
//! followed by a redraw wake-up for the UI loop.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use crate::clipboard::SharedClipboard;
use crate::error::ClipboardError;
use crate::host::{CopyFeedback, DelayedCallback, DelayedTask, HostSurface, Notice};
use crate::ui::app::SharedModel;
use crate::ui::events::AppEvent;
use crate::ui::panel::PanelIntent;

pub struct TuiHost {
    model: SharedModel,
    clipboard: SharedClipboard,
    wake: UnboundedSender<AppEvent>,
}

impl TuiHost {
    pub fn new(model: SharedModel, wake: UnboundedSender<AppEvent>) -> Self {
        Self {
            model,
            clipboard: SharedClipboard::new(),
            wake,
        }
    }

    fn apply(&self, intent: PanelIntent) {
        self.model.lock().dispatch(intent);
        // The loop only stops listening on shutdown.
        let _ = self.wake.send(AppEvent::Redraw);
    }
}

impl HostSurface for TuiHost {
    fn read_input(&self) -> String {
        self.model.lock().editor.text().to_string()
    }

    fn set_loading(&self, loading: bool) {
        self.apply(PanelIntent::SetLoading(loading));
    }

    fn show_result(&self, visible: bool) {
        self.apply(PanelIntent::ShowResult(visible));
    }

    fn set_result_text(&self, text: &str) {
        self.apply(PanelIntent::SetResultText(text.to_string()));
    }

    fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.write(text)
    }

    fn set_copy_feedback(&self, feedback: CopyFeedback) {
        self.apply(PanelIntent::SetCopyFeedback(feedback));
    }

    fn notify(&self, notice: Notice) {
        self.apply(PanelIntent::Notify(notice));
    }

    fn schedule_delayed(&self, delay: Duration, callback: DelayedCallback) -> DelayedTask {
        DelayedTask::spawn_tokio(delay, callback)
    }
}
