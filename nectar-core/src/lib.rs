//! Board-agnostic core logic for the beverage kiosk firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (button input, pump output)
//! - Debounced button panel polling
//! - Timed pump control
//! - Drink recipes
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod dispenser;
pub mod panel;
pub mod recipes;
pub mod traits;
