//! Button input traits

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sensing mode of an input line
///
/// The panel accepts buttons wired to plain digital pins as well as
/// buttons read through an ADC pin (resistor-ladder panels). The mode is
/// chosen per channel at construction and branched on at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SenseMode {
    /// Binary-threshold digital read
    #[default]
    Digital,
    /// Thresholded analog read (active above mid-scale)
    Analog,
}

/// Trait for a single button input line
///
/// Implementations produce one boolean "is this input currently asserted"
/// reading per call. There is no error path: a miswired line is a wiring
/// fault, not something the firmware can detect or recover from.
pub trait ButtonInput {
    /// Check whether the input is currently asserted
    ///
    /// Takes `&mut self` because analog sampling typically requires
    /// mutable access to the ADC.
    fn is_active(&mut self) -> bool;
}
