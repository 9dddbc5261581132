//! Pump identities for the four-tank dispenser

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of pumps on the dispenser
pub const PUMP_COUNT: usize = 4;

/// Pump locations, in left-to-right tank order
///
/// The discriminant of each pump is its output index on the dispenser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pump {
    /// The leftmost tank pump
    Left = 0,
    /// The mid-left tank pump
    MidLeft = 1,
    /// The mid-right tank pump
    MidRight = 2,
    /// The rightmost tank pump
    Right = 3,
}

impl Pump {
    /// All pumps in tank order
    pub const ALL: [Pump; PUMP_COUNT] =
        [Pump::Left, Pump::MidLeft, Pump::MidRight, Pump::Right];

    /// Map an output index to its pump, if in range
    pub fn from_index(index: u8) -> Option<Pump> {
        match index {
            0 => Some(Pump::Left),
            1 => Some(Pump::MidLeft),
            2 => Some(Pump::MidRight),
            3 => Some(Pump::Right),
            _ => None,
        }
    }

    /// Output index of this pump on the dispenser
    pub fn index(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for pump in Pump::ALL {
            assert_eq!(Pump::from_index(pump.index()), Some(pump));
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(Pump::from_index(4), None);
    }
}
