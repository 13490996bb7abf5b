//! Per-digit flip state machine.
//!
//! A digit owns its committed face (`current`), its pending face
//! (`next`), and one [`FlipAnimator`]. At most one flip runs at a time;
//! requests that arrive mid-flight only retarget `next`, so rapid
//! successive changes collapse onto the in-flight animation's commit.

use serde::{Deserialize, Serialize};

use crate::animator::{FlipAnimator, Progress};
use crate::easing::Easing;

/// Observable state of a digit tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipPhase {
    /// No flip in progress; `current == next`.
    Idle,
    /// The animator is running.
    Flipping,
}

/// Outcome of advancing a digit by one tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DigitTick {
    /// Fold angle after this tick, in [0, 180] degrees.
    pub angle: f32,
    /// Set on the tick that committed `next` into `current`.
    pub committed: bool,
}

#[derive(Clone, Debug)]
pub struct FlipDigit {
    current: u8,
    next: u8,
    animator: FlipAnimator,
}

impl FlipDigit {
    /// Seeded construction: `current == next == initial % 10`, so the
    /// first displayed frame never flips.
    pub fn new(initial: u8, duration_ms: u32, easing: Easing) -> Self {
        let value = initial % 10;
        Self {
            current: value,
            next: value,
            animator: FlipAnimator::new(duration_ms, easing),
        }
    }

    /// Ask the digit to show `target` (normalized modulo 10).
    ///
    /// While a flip is in flight, or when `target` is already displayed,
    /// only the pending face is retargeted; the in-flight run keeps its
    /// elapsed time and commits whatever `next` holds when it finishes.
    /// Returns whether an animation started.
    pub fn request_flip(&mut self, target: u8) -> bool {
        let target = target % 10;
        if target == self.current || self.animator.is_active() {
            self.next = target;
            return false;
        }
        self.next = target;
        self.animator.start()
    }

    /// Force both faces to `value` without animating. Used when adopting
    /// the first clock reading at startup.
    pub fn seed(&mut self, value: u8) {
        let value = value % 10;
        self.current = value;
        self.next = value;
    }

    /// Advance the in-flight flip by `dt` seconds. `None` when idle.
    /// The completing tick commits `next` into `current` before
    /// returning, so the caller observes post-commit state.
    pub fn tick(&mut self, dt: f32) -> Option<DigitTick> {
        let Progress { angle, finished } = self.animator.tick(dt)?;
        if finished {
            self.current = self.next;
        }
        Some(DigitTick {
            angle,
            committed: finished,
        })
    }

    #[inline]
    pub fn current(&self) -> u8 {
        self.current
    }

    #[inline]
    pub fn next(&self) -> u8 {
        self.next
    }

    /// Instantaneous fold angle; 0 when idle.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.animator.angle()
    }

    #[inline]
    pub fn phase(&self) -> FlipPhase {
        if self.animator.is_active() {
            FlipPhase::Flipping
        } else {
            FlipPhase::Idle
        }
    }

    #[inline]
    pub fn is_flipping(&self) -> bool {
        self.animator.is_active()
    }
}
