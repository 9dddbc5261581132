//! Button identities for the five-key panel

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of buttons on the panel
pub const BUTTON_COUNT: usize = 5;

/// Panel buttons, in left-to-right order
///
/// The discriminant of each button is its channel index on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Button {
    /// The leftmost button (button 1)
    Left = 0,
    /// The mid-left button (button 2)
    MidLeft = 1,
    /// The middle button (button 3)
    Middle = 2,
    /// The mid-right button (button 4)
    MidRight = 3,
    /// The rightmost button (button 5)
    Right = 4,
}

impl Button {
    /// All buttons in panel order
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::Left,
        Button::MidLeft,
        Button::Middle,
        Button::MidRight,
        Button::Right,
    ];

    /// Map a channel index to its button, if in range
    pub fn from_index(index: u8) -> Option<Button> {
        match index {
            0 => Some(Button::Left),
            1 => Some(Button::MidLeft),
            2 => Some(Button::Middle),
            3 => Some(Button::MidRight),
            4 => Some(Button::Right),
            _ => None,
        }
    }

    /// Channel index of this button on the panel
    pub fn index(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for button in Button::ALL {
            assert_eq!(Button::from_index(button.index()), Some(button));
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(Button::from_index(5), None);
        assert_eq!(Button::from_index(255), None);
    }

    #[test]
    fn test_panel_order() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(button.index() as usize, i);
        }
    }
}
