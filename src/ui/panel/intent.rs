//! Intents for the summary panel.

use crate::host::{CopyFeedback, Notice};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PanelIntent {
    /// Request started (`true`) or settled (`false`).
    SetLoading(bool),

    /// Show or hide the result panel.
    ShowResult(bool),

    /// Replace the summary text.
    SetResultText(String),

    /// Change the copy button presentation.
    SetCopyFeedback(CopyFeedback),

    /// Raise a modal notice, replacing any current one.
    Notify(Notice),

    /// User dismissed the notice.
    DismissNotice,

    /// Spinner advance.
    AnimationTick,
}

impl Intent for PanelIntent {}
