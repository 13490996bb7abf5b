#![allow(dead_code)]
//! Splitflap clock core (engine-agnostic)
//!
//! The flip-clock animation engine: per-digit flip state machines, the
//! timed animator that maps eased progress to a fold angle, and the
//! renderer that turns angles into two-half draw plans. Hosts supply
//! the tick cadence, the scale factor, and a surface; this crate
//! supplies the state machines and the math, as data contracts.

pub mod animator;
pub mod colon;
pub mod config;
pub mod digit;
pub mod easing;
pub mod engine;
pub mod geometry;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod render;
pub mod time;

// Re-exports for consumers (adapters)
pub use animator::{FlipAnimator, Progress, FULL_FOLD_DEG, MIN_DURATION_MS};
pub use colon::ColonBlinker;
pub use config::{parse_config_json, Config};
pub use digit::{DigitTick, FlipDigit, FlipPhase};
pub use easing::Easing;
pub use engine::Engine;
pub use geometry::{clamp_scale, FaceLayout, Rect, TileMetrics, MAX_SCALE, MIN_SCALE};
pub use ids::{ColonSlot, DigitSlot, Slot, COLON_SLOTS, DIGIT_SLOTS, FACE_ORDER};
pub use inputs::{Command, Inputs};
pub use outputs::{Change, ClockEvent, Outputs, SlotPlan};
pub use render::{plan_colon, plan_tile, ColonPlan, HalfPlan, TilePlan, HALF_FOLD_DEG};
pub use time::{DigitReading, ReadingError, TimeFormat};
