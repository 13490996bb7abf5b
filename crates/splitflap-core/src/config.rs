//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::geometry::TileMetrics;

/// Timing, curve, and geometry settings for one clock face.
/// Every field has a default, so a partial JSON blob deserializes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flip run length in milliseconds.
    pub flip_duration_ms: u32,
    /// Colon blink half-period in milliseconds.
    pub blink_interval_ms: u32,
    pub easing: Easing,
    /// Initial scale factor; clamped into [0.5, 3.0] by the engine.
    pub scale: f32,
    pub metrics: TileMetrics,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flip_duration_ms: 420,
            blink_interval_ms: 500,
            easing: Easing::default(),
            scale: 1.0,
            metrics: TileMetrics::default(),
        }
    }
}

/// Parse a [`Config`] from a JSON settings blob.
pub fn parse_config_json(json: &str) -> Result<Config, serde_json::Error> {
    serde_json::from_str(json)
}
