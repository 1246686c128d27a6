//! Terminal front end.
//!
//! The controller drives the screen only through [`TuiHost`]; key handling
//! and rendering read the shared [`app::UiModel`].

pub mod app;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod host;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod panel;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use host::TuiHost;
pub use runtime::run;
