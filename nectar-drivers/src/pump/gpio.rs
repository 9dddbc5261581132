//! GPIO pump output
//!
//! Switches a pump supply through a GPIO pin, either directly into a
//! driver stage or through a relay/MOSFET board. Relay boards are often
//! active-low, so the polarity is part of the construction.

use nectar_core::config::PinConfig;
use nectar_core::traits::PumpOutput;

/// Trait for GPIO pin abstraction
pub trait OutputPin {
    /// Set the pin high
    fn set_high(&mut self);

    /// Set the pin low
    fn set_low(&mut self);

    /// Check if the pin is set high
    fn is_set_high(&self) -> bool;
}

/// GPIO pump output
///
/// Tracks the logical pump state separately from the pin level so the
/// polarity stays an implementation detail of this driver.
pub struct GpioPump<P> {
    pin: P,
    /// Pin level that runs the pump
    active_high: bool,
    /// Current logical state (true = pump running)
    on: bool,
}

impl<P: OutputPin> GpioPump<P> {
    /// Create a pump output with explicit polarity
    ///
    /// The pump is stopped immediately so the pin starts in the idle
    /// level whatever state it was left in.
    pub fn new(pin: P, active_high: bool) -> Self {
        let mut pump = Self {
            pin,
            active_high,
            on: false,
        };
        pump.set_on(false);
        pump
    }

    /// Pump runs when the pin is high
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Pump runs when the pin is low (relay boards)
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a pump output matching a wiring description
    ///
    /// An inverted pin in the config means an active-low output stage.
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, !config.inverted)
    }
}

impl<P: OutputPin> PumpOutput for GpioPump<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        if on == self.active_high {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
