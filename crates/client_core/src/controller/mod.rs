//! Controller layer: UI actions and the selection state machine.

pub mod events;
pub mod selection;

pub use events::{ArrowDirection, UiAction};
pub use selection::{SelectionController, SelectionState, Transition};
