//! Debounced button panel
//!
//! Polls five input channels and dispatches confirmed presses to a
//! single registered callback.

pub mod buttons;
pub mod poller;

pub use buttons::{Button, BUTTON_COUNT};
pub use poller::{Panel, CONFIRM_INTERVAL_MS, CONFIRM_ROUNDS};
