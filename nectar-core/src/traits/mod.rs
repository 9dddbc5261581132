//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod input;
pub mod pump;

pub use input::{ButtonInput, SenseMode};
pub use pump::PumpOutput;
