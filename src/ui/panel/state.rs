//! State for the summary panel.

use crate::host::{CopyFeedback, Notice};
use crate::ui::mvi::UiState;

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryPanelState {
    /// A summarize request is in flight; the submit trigger is disabled.
    pub loading: bool,
    pub animation_tick: u8,
    pub result_visible: bool,
    pub result_text: String,
    pub copy_feedback: CopyFeedback,
    pub notice: Option<Notice>,
}

impl UiState for SummaryPanelState {}

impl SummaryPanelState {
    /// Submit is enabled only while idle.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Copy is reachable only when the result panel is on screen.
    pub fn can_copy(&self) -> bool {
        self.result_visible && !self.result_text.is_empty()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.animation_tick as usize) % SPINNER_FRAMES.len()]
    }
}
