//! Slot identifiers for the fixed clock face: six digit tiles and two
//! colon separators, laid out HH : MM : SS.

use serde::{Deserialize, Serialize};

/// Number of digit tiles on the face.
pub const DIGIT_SLOTS: usize = 6;

/// Number of colon separators on the face.
pub const COLON_SLOTS: usize = 2;

/// Digit tile position, left to right: 0-1 hours, 2-3 minutes, 4-5 seconds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DigitSlot(pub u8);

/// Colon position: 0 between hours and minutes, 1 between minutes and seconds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ColonSlot(pub u8);

/// Any drawable slot on the face.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Digit(DigitSlot),
    Colon(ColonSlot),
}

impl DigitSlot {
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl ColonSlot {
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Left-to-right visual order of the face.
pub const FACE_ORDER: [Slot; DIGIT_SLOTS + COLON_SLOTS] = [
    Slot::Digit(DigitSlot(0)),
    Slot::Digit(DigitSlot(1)),
    Slot::Colon(ColonSlot(0)),
    Slot::Digit(DigitSlot(2)),
    Slot::Digit(DigitSlot(3)),
    Slot::Colon(ColonSlot(1)),
    Slot::Digit(DigitSlot(4)),
    Slot::Digit(DigitSlot(5)),
];
