//! Clock readings: the six-digit HHMMSS values a tick source delivers
//! once per second.
//!
//! Validation happens here, at the boundary; the engine only ever sees a
//! [`DigitReading`] whose entries are already in [0,9].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::DIGIT_SLOTS;

/// Hour convention for formatting readings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// 00-23 hours.
    #[default]
    H24,
    /// 12, 1-11 hours; midnight and noon both render as 12.
    H12,
}

/// Errors produced while validating a textual reading.
///
/// A malformed reading is a contract violation by the tick source, not a
/// recoverable display state; callers should propagate it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    #[error("reading must be {DIGIT_SLOTS} digits, got {0} characters")]
    BadLength(usize),
    #[error("non-digit character {1:?} at position {0}")]
    BadDigit(usize, char),
}

/// A validated HHMMSS reading, one value in [0,9] per digit tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitReading([u8; DIGIT_SLOTS]);

impl DigitReading {
    /// Parse a reading from its textual form, e.g. `"235907"`.
    pub fn parse(s: &str) -> Result<Self, ReadingError> {
        let count = s.chars().count();
        if count != DIGIT_SLOTS {
            return Err(ReadingError::BadLength(count));
        }
        let mut digits = [0u8; DIGIT_SLOTS];
        for (i, c) in s.chars().enumerate() {
            digits[i] = c.to_digit(10).ok_or(ReadingError::BadDigit(i, c))? as u8;
        }
        Ok(Self(digits))
    }

    /// Build a reading from an hour/minute/second triple. Out-of-range
    /// components wrap into range rather than failing.
    pub fn from_hms(hour: u32, minute: u32, second: u32, format: TimeFormat) -> Self {
        let h = match format {
            TimeFormat::H24 => hour % 24,
            TimeFormat::H12 => {
                let h = (hour % 24) % 12;
                if h == 0 {
                    12
                } else {
                    h
                }
            }
        };
        let m = minute % 60;
        let s = second % 60;
        Self([
            (h / 10) as u8,
            (h % 10) as u8,
            (m / 10) as u8,
            (m % 10) as u8,
            (s / 10) as u8,
            (s % 10) as u8,
        ])
    }

    /// Build a reading directly from per-tile values (each taken mod 10).
    pub fn from_digits(digits: [u8; DIGIT_SLOTS]) -> Self {
        Self(digits.map(|d| d % 10))
    }

    #[inline]
    pub fn digits(&self) -> &[u8; DIGIT_SLOTS] {
        &self.0
    }
}

impl fmt::Display for DigitReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}
