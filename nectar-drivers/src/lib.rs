//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in nectar-core for the kiosk hardware:
//!
//! - Button input channels (digital or thresholded analog sensing)
//! - GPIO pump outputs

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod pump;
