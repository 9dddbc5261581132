//! Beverage dispenser
//!
//! Timed on/off control of the four tank pumps.

pub mod control;
pub mod pumps;

pub use control::Dispenser;
pub use pumps::{Pump, PUMP_COUNT};
