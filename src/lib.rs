//! Paste text, send it to a summarization service, show and copy the result.
//!
//! [`controller::SummarizeController`] owns the lifecycle. It talks to the
//! remote service through [`service::SummaryService`] and to whatever is
//! presenting it through [`host::HostSurface`].

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod input;
pub mod logging;
pub mod print;
pub mod service;
pub mod ui;
