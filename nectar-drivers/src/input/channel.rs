//! Button input channel
//!
//! One physical input line, read either as a plain logic level or as a
//! thresholded analog sample. The sensing mode is picked per channel at
//! construction; panels mixing both kinds of wiring work unchanged.

use nectar_core::config::ChannelConfig;
use nectar_core::traits::{ButtonInput, SenseMode};

/// Full-scale reading of the 10-bit board ADC
pub const ANALOG_MAX: u16 = 1023;

/// Analog activity threshold
///
/// Mid-scale; a sample must be strictly above it to count as active, so
/// 511 reads inactive and 512 reads active.
pub const ANALOG_THRESHOLD: u16 = 511;

/// Pad sampling trait for platform abstraction
///
/// The board crate implements this over its GPIO/ADC registers. The
/// channel asks for whichever reading its mode needs, never both.
pub trait InputPad {
    /// Read the binary logic level
    fn read_level(&mut self) -> bool;

    /// Read a raw analog sample (0-1023)
    fn read_analog(&mut self) -> u16;
}

/// One button input line with its sensing mode
///
/// Construction configures nothing beyond taking ownership of the pad;
/// wiring the right pad to the right mode is the caller's contract.
pub struct InputChannel<P> {
    pad: P,
    mode: SenseMode,
}

impl<P: InputPad> InputChannel<P> {
    /// Create a channel with an explicit sensing mode
    pub fn new(pad: P, mode: SenseMode) -> Self {
        Self { pad, mode }
    }

    /// Create a binary-threshold digital channel
    pub fn digital(pad: P) -> Self {
        Self::new(pad, SenseMode::Digital)
    }

    /// Create a thresholded analog channel
    pub fn analog(pad: P) -> Self {
        Self::new(pad, SenseMode::Analog)
    }

    /// Create a channel matching a wiring description
    ///
    /// The caller resolves the configured pin into the pad; only the
    /// sensing mode is taken from the config here.
    pub fn from_config(pad: P, config: &ChannelConfig) -> Self {
        Self::new(pad, config.mode)
    }

    /// Sensing mode of this channel
    pub fn mode(&self) -> SenseMode {
        self.mode
    }
}

impl<P: InputPad> ButtonInput for InputChannel<P> {
    fn is_active(&mut self) -> bool {
        match self.mode {
            SenseMode::Digital => self.pad.read_level(),
            SenseMode::Analog => self.pad.read_analog() > ANALOG_THRESHOLD,
        }
    }
}
