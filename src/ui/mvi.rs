//! Model-View-Intent primitives for the terminal front end.
//!
//! ```text
//! host call / key ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Host capability calls from the controller never touch widgets directly;
//! they become intents reduced into plain state, which the render pass reads.

/// Marker trait for view state. Must be cheap to clone and comparable.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for events that drive a reducer.
pub trait Intent: Send + 'static {}

/// Pure `(State, Intent) -> State` transition.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
