//! Shared test utilities: a recording host, a scripted service, and a mock
//! HTTP summarization server.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use anysummary::error::{ClipboardError, ServiceError};
use anysummary::host::{CopyFeedback, DelayedCallback, DelayedTask, HostSurface, Notice};
use anysummary::service::SummaryService;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

// -- Host double --------------------------------------------------------------

/// Every capability call made against [`RecordingHost`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SetLoading(bool),
    ShowResult(bool),
    SetResultText(String),
    WriteClipboard(String),
    SetCopyFeedback(CopyFeedback),
    Notify(Notice),
    Schedule(Duration),
}

struct Scheduled {
    delay: Duration,
    cancelled: Arc<AtomicBool>,
    callback: Option<DelayedCallback>,
}

/// Host that records calls and keeps the resulting UI state.
///
/// Delayed callbacks are held until [`RecordingHost::fire_scheduled`].
#[derive(Default)]
pub struct RecordingHost {
    input: Mutex<String>,
    calls: Mutex<Vec<HostCall>>,
    loading: AtomicBool,
    result_visible: AtomicBool,
    result_text: Mutex<String>,
    copy_feedback: Mutex<CopyFeedback>,
    clipboard: Mutex<Option<String>>,
    clipboard_fails: AtomicBool,
    scheduled: Mutex<Vec<Scheduled>>,
}

impl RecordingHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_input(&self, text: &str) {
        *self.input.lock() = text.to_string();
    }

    pub fn fail_clipboard(&self) {
        self.clipboard_fails.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible.load(Ordering::SeqCst)
    }

    pub fn result_text(&self) -> String {
        self.result_text.lock().clone()
    }

    pub fn copy_feedback(&self) -> CopyFeedback {
        *self.copy_feedback.lock()
    }

    pub fn clipboard(&self) -> Option<String> {
        self.clipboard.lock().clone()
    }

    /// Number of scheduled callbacks that are neither run nor cancelled.
    pub fn pending_scheduled(&self) -> usize {
        self.scheduled
            .lock()
            .iter()
            .filter(|s| s.callback.is_some() && !s.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Run every scheduled callback that has not been cancelled.
    /// Returns how many ran.
    pub fn fire_scheduled(&self) -> usize {
        let ready: Vec<DelayedCallback> = {
            let mut scheduled = self.scheduled.lock();
            scheduled
                .iter_mut()
                .filter(|s| !s.cancelled.load(Ordering::SeqCst))
                .filter_map(|s| s.callback.take())
                .collect()
        };
        let count = ready.len();
        for callback in ready {
            callback();
        }
        count
    }

    fn record(&self, call: HostCall) {
        self.calls.lock().push(call);
    }
}

impl HostSurface for RecordingHost {
    fn read_input(&self) -> String {
        self.input.lock().clone()
    }

    fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::SeqCst);
        self.record(HostCall::SetLoading(loading));
    }

    fn show_result(&self, visible: bool) {
        self.result_visible.store(visible, Ordering::SeqCst);
        self.record(HostCall::ShowResult(visible));
    }

    fn set_result_text(&self, text: &str) {
        *self.result_text.lock() = text.to_string();
        self.record(HostCall::SetResultText(text.to_string()));
    }

    fn write_clipboard(&self, text: &str) -> Result<(), ClipboardError> {
        self.record(HostCall::WriteClipboard(text.to_string()));
        if self.clipboard_fails.load(Ordering::SeqCst) {
            return Err(ClipboardError("permission denied".into()));
        }
        *self.clipboard.lock() = Some(text.to_string());
        Ok(())
    }

    fn set_copy_feedback(&self, feedback: CopyFeedback) {
        *self.copy_feedback.lock() = feedback;
        self.record(HostCall::SetCopyFeedback(feedback));
    }

    fn notify(&self, notice: Notice) {
        self.record(HostCall::Notify(notice));
    }

    fn schedule_delayed(&self, delay: Duration, callback: DelayedCallback) -> DelayedTask {
        self.record(HostCall::Schedule(delay));
        let cancelled = Arc::new(AtomicBool::new(false));
        self.scheduled.lock().push(Scheduled {
            delay,
            cancelled: Arc::clone(&cancelled),
            callback: Some(callback),
        });
        DelayedTask::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}

// -- Service double -----------------------------------------------------------

/// Service that replays scripted replies and records every call.
///
/// With a gate, each call parks until [`ScriptedService::release`].
pub struct ScriptedService {
    replies: Mutex<VecDeque<Result<String, ServiceError>>>,
    requests: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
    entered: Arc<Notify>,
}

impl ScriptedService {
    pub fn new(replies: Vec<Result<String, ServiceError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            gate: None,
            entered: Arc::new(Notify::new()),
        })
    }

    pub fn gated(replies: Vec<Result<String, ServiceError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
            gate: Some(Arc::new(Notify::new())),
            entered: Arc::new(Notify::new()),
        })
    }

    pub fn ok(summary: &str) -> Arc<Self> {
        Self::new(vec![Ok(summary.to_string())])
    }

    pub fn failing(err: ServiceError) -> Arc<Self> {
        Self::new(vec![Err(err)])
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Wait until a call has entered `summarize`.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    /// Let one parked call finish.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }
}

#[async_trait]
impl SummaryService for ScriptedService {
    async fn summarize(&self, text: &str) -> Result<String, ServiceError> {
        self.requests.lock().push(text.to_string());
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .pop_front()
            .unwrap_or(Err(ServiceError::Transport("no scripted reply".into())))
    }
}

/// Input that passes validation: `n` repeated `a`s.
pub fn valid_input(n: usize) -> String {
    "a".repeat(n)
}
