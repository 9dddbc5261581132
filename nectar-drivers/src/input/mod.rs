//! Button input drivers

pub mod channel;

pub use channel::{InputChannel, InputPad, ANALOG_MAX, ANALOG_THRESHOLD};
