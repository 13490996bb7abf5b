//! Flip animator: drives eased progress from 0 to 1 over a configured
//! duration and exposes it as a fold angle in [0, 180] degrees.
//!
//! Notification follows the data-return contract: each `tick` result is
//! the "changed" channel, and its `finished` flag is the "finished"
//! channel, reported exactly once on the completing tick.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Shortest allowed run length. Guards the elapsed/duration division.
pub const MIN_DURATION_MS: u32 = 1;

/// Angle of a fully completed fold.
pub const FULL_FOLD_DEG: f32 = 180.0;

/// Per-tick progress report from [`FlipAnimator::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Eased fold angle in degrees, in [0, 180].
    pub angle: f32,
    /// True exactly once, on the tick that completes the run.
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct FlipAnimator {
    active: bool,
    /// Seconds since the run started.
    elapsed: f32,
    /// Run length in seconds, never below [`MIN_DURATION_MS`].
    duration: f32,
    angle: f32,
    easing: Easing,
}

impl FlipAnimator {
    pub fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            active: false,
            elapsed: 0.0,
            duration: duration_ms.max(MIN_DURATION_MS) as f32 / 1000.0,
            angle: 0.0,
            easing,
        }
    }

    /// Begin a run. No-op while a run is in flight, so overlapping starts
    /// cannot reset `elapsed`. Returns whether a new run actually began.
    pub fn start(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.elapsed = 0.0;
        self.angle = 0.0;
        true
    }

    /// Advance by `dt` seconds. Returns `None` when idle (the caller's
    /// cadence stops with `is_active`, so an idle tick is already
    /// exceptional); otherwise the angle for this tick, with `finished`
    /// set on the completing tick.
    pub fn tick(&mut self, dt: f32) -> Option<Progress> {
        if !self.active {
            return None;
        }
        self.elapsed += dt.max(0.0);
        let p = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.angle = FULL_FOLD_DEG * self.easing.evaluate(p);
        let finished = p >= 1.0;
        if finished {
            self.active = false;
        }
        Some(Progress {
            angle: self.angle,
            finished,
        })
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Instantaneous fold angle; degenerate 0 when idle.
    #[inline]
    pub fn angle(&self) -> f32 {
        if self.active {
            self.angle
        } else {
            0.0
        }
    }
}
