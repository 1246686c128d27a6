//! Summary panel feature module.
//!
//! Holds everything the host surface can change on screen: the busy
//! indicator, the result panel and its text, the copy button's feedback,
//! and the modal notice.
//!
//! - `state.rs` - panel state
//! - `intent.rs` - host calls and user actions
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::PanelIntent;
pub use reducer::PanelReducer;
pub use state::{SummaryPanelState, SPINNER_FRAMES};
