//! Input contracts for the engine.
//!
//! Hosts build an `Inputs` each tick: face-level commands plus, when the
//! tick source crossed a second boundary, a fresh reading. Both lists
//! are applied before time advances.

use serde::{Deserialize, Serialize};

use crate::time::DigitReading;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    /// Commands applied before stepping.
    #[serde(default)]
    pub commands: Vec<Command>,
    /// Fresh reading from the tick source, if one arrived this tick.
    #[serde(default)]
    pub reading: Option<DigitReading>,
}

impl Inputs {
    /// Inputs carrying only a reading.
    pub fn with_reading(reading: DigitReading) -> Self {
        Self {
            commands: Vec::new(),
            reading: Some(reading),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Set the face scale factor, clamped into [0.5, 3.0]. Geometry of
    /// subsequent plans changes; in-flight flips keep their elapsed time.
    SetScale { scale: f32 },
}
