//! Easing curves for flip progress.
//!
//! An `Easing` maps normalized progress in [0,1] to eased progress in
//! [0,1]: monotonic, with `evaluate(0) == 0` and `evaluate(1) == 1`.
//! Curves are plain `Copy` values evaluated as pure functions; there is
//! no shared easing instance anywhere in the crate.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start and end, fast middle. The split-flap default.
    #[default]
    InOutCubic,
    /// CSS-style cubic-bezier timing with control points (x1, y1, x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Evaluate the curve at progress `p`. Out-of-range input clamps to [0,1].
    pub fn evaluate(&self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => p,
            Easing::InOutCubic => ease_in_out_cubic(p),
            Easing::CubicBezier(x1, y1, x2, y2) => bezier_ease(p, x1, y1, x2, y2),
        }
    }
}

#[inline]
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
/// Monotonic X in [0,1] assumed for x1/x2 in [0,1].
fn bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
