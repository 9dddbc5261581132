//! Hardware configuration types
//!
//! These types describe the kiosk wiring. They are plain data: the board
//! crate turns them into concrete pin objects, the core never touches
//! registers itself.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dispenser::PUMP_COUNT;
use crate::panel::BUTTON_COUNT;
use crate::traits::SenseMode;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// Board pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// One button channel: its pin and how it is sensed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelConfig {
    /// Input pin for this channel
    pub pin: PinConfig,
    /// Digital or analog sensing
    pub mode: SenseMode,
}

impl ChannelConfig {
    /// Digital channel on the given pin
    pub const fn digital(pin: u8) -> Self {
        Self {
            pin: PinConfig::new(pin),
            mode: SenseMode::Digital,
        }
    }

    /// Analog channel on the given pin
    pub const fn analog(pin: u8) -> Self {
        Self {
            pin: PinConfig::new(pin),
            mode: SenseMode::Analog,
        }
    }
}

/// Button panel wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Input channels in panel order, leftmost button first
    pub channels: [ChannelConfig; BUTTON_COUNT],
}

/// Dispenser wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DispenserConfig {
    /// Pump output pins in tank order, leftmost pump first
    pub pumps: [PinConfig; PUMP_COUNT],
}

/// Complete kiosk wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KioskConfig {
    /// Button panel wiring
    pub panel: PanelConfig,
    /// Dispenser wiring
    pub dispenser: DispenserConfig,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self::reference_board()
    }
}

impl KioskConfig {
    /// Wiring of the reference kiosk board
    ///
    /// Buttons on digital pins 2-6, pumps on pins 8-11.
    pub const fn reference_board() -> Self {
        Self {
            panel: PanelConfig {
                channels: [
                    ChannelConfig::digital(2),
                    ChannelConfig::digital(3),
                    ChannelConfig::digital(4),
                    ChannelConfig::digital(5),
                    ChannelConfig::digital(6),
                ],
            },
            dispenser: DispenserConfig {
                pumps: [
                    PinConfig::new(8),
                    PinConfig::new(9),
                    PinConfig::new(10),
                    PinConfig::new(11),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_config() {
        let pin = PinConfig::new(10);
        assert_eq!(pin.pin, 10);
        assert!(!pin.inverted);
        assert!(!pin.pull_up);

        let inverted = PinConfig::inverted(12);
        assert!(inverted.inverted);

        let pullup = PinConfig::with_pullup(4);
        assert!(pullup.pull_up);
    }

    #[test]
    fn test_channel_config_modes() {
        assert_eq!(ChannelConfig::digital(2).mode, SenseMode::Digital);
        assert_eq!(ChannelConfig::analog(14).mode, SenseMode::Analog);
    }

    #[test]
    fn test_reference_board_pins_are_distinct() {
        let config = KioskConfig::reference_board();

        let mut pins: [u8; BUTTON_COUNT + PUMP_COUNT] = Default::default();
        for (slot, channel) in pins.iter_mut().zip(config.panel.channels.iter()) {
            *slot = channel.pin.pin;
        }
        for (slot, pump) in pins[BUTTON_COUNT..]
            .iter_mut()
            .zip(config.dispenser.pumps.iter())
        {
            *slot = pump.pin;
        }

        for (i, a) in pins.iter().enumerate() {
            for b in &pins[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
