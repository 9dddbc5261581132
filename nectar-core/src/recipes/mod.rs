//! Drink recipes
//!
//! Each panel button pours one fixed drink. A recipe names the pumps that
//! open together and how long they stay open; the durations are flow
//! calibration from the reference machine, each pouring a 200 ml cup:
//!
//! - 6000 ms from 1 tank
//! - 3000 ms from 2 tanks
//! - 2300 ms from 3 tanks
//! - 1950 ms from 4 tanks

use heapless::Vec;

use crate::dispenser::{Pump, PUMP_COUNT};
use crate::panel::Button;

/// A pour: which pumps open, and for how long
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Recipe {
    pumps: Vec<Pump, PUMP_COUNT>,
    duration_ms: u32,
}

impl Recipe {
    /// Create a recipe from a pump set and flow duration
    ///
    /// Duplicate pumps are kept once; a pump cannot open twice.
    pub fn new(pumps: &[Pump], duration_ms: u32) -> Self {
        let mut set: Vec<Pump, PUMP_COUNT> = Vec::new();
        for &pump in pumps {
            if !set.contains(&pump) {
                // Capacity equals the number of distinct pumps
                let _ = set.push(pump);
            }
        }
        Self {
            pumps: set,
            duration_ms,
        }
    }

    /// Pumps that open for this pour
    pub fn pumps(&self) -> &[Pump] {
        &self.pumps
    }

    /// Flow duration in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

/// The drink poured by each panel button
pub fn for_button(button: Button) -> Recipe {
    match button {
        Button::Left => Recipe::new(&[Pump::Left], 6000),
        Button::MidLeft => Recipe::new(&[Pump::MidLeft], 6000),
        Button::Middle => Recipe::new(&[Pump::Left, Pump::MidLeft], 3000),
        Button::MidRight => {
            Recipe::new(&[Pump::Left, Pump::MidLeft, Pump::MidRight], 2300)
        }
        Button::Right => Recipe::new(&Pump::ALL, 1950),
    }
}
