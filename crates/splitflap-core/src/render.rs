//! Flip renderer: turns (current, next, angle) into a two-half draw plan.
//!
//! The fold is faked with a 1-D vertical scale about the hinge line: the
//! hinge is always rendered edge-on, so `|cos(angle)|` foreshortening of
//! one half is enough to read as a hinged card, no 3D projection needed.
//! Plans are plain data in tile-local coordinates; the host clips, scales
//! about `pivot_y`, and draws the glyph centered in the tile.

use serde::{Deserialize, Serialize};

use crate::animator::FULL_FOLD_DEG;
use crate::geometry::{Rect, TileMetrics};

/// Angle at which the folding half lies edge-on and hands over.
pub const HALF_FOLD_DEG: f32 = 90.0;

/// Hinge shadow line insets from the tile's left/right edges (scale 1.0).
const HINGE_INSET_LEFT: f32 = 12.0;
const HINGE_INSET_RIGHT: f32 = 16.0;

/// Dot placement for the colon, as fractions of tile height.
const DOT_UPPER: f32 = 0.38;
const DOT_LOWER: f32 = 0.62;

/// Half-tile draw instruction: clip to `clip`, apply a vertical scale of
/// `v_scale` about the horizontal line `pivot_y`, then draw `glyph`
/// centered in the full tile.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HalfPlan {
    pub clip: Rect,
    pub glyph: u8,
    pub v_scale: f32,
    pub pivot_y: f32,
}

/// Complete draw plan for one digit tile, in tile-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TilePlan {
    /// Rounded card background.
    pub card: Rect,
    pub corner_radius: f32,
    /// Glyph size in px at the plan's scale.
    pub font_px: f32,
    /// Hinge line height and its (left, right) x endpoints.
    pub split_y: f32,
    pub hinge_x: (f32, f32),
    pub top: HalfPlan,
    pub bottom: HalfPlan,
}

/// Draw plan for a colon separator tile.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColonPlan {
    pub tile: Rect,
    /// Blink state; hidden dots keep their layout slot.
    pub on: bool,
    pub dot_radius: f32,
    /// Centers of the upper and lower dot.
    pub dots: [(f32, f32); 2],
}

/// `|cos|` foreshortening of a half folding toward the hinge.
#[inline]
fn fold_scale(angle_deg: f32) -> f32 {
    angle_deg.to_radians().cos().abs()
}

/// Plan one digit tile at the given fold angle (0 when idle).
///
/// Angle 0 yields both halves of `current` undistorted, so the idle plan
/// and the first instant of a flip coincide; angle 180 yields both halves
/// of `next` undistorted, coinciding with the idle plan after commit.
pub fn plan_tile(
    current: u8,
    next: u8,
    angle: f32,
    metrics: &TileMetrics,
    scale: f32,
) -> TilePlan {
    let current = current % 10;
    let next = next % 10;
    let angle = angle.clamp(0.0, FULL_FOLD_DEG);

    let w = metrics.tile_w * scale;
    let h = metrics.tile_h * scale;
    let pad = metrics.padding * scale;
    let inset = metrics.card_inset * scale;
    let split_y = metrics.split_y(scale);

    let card = Rect::new(0.0, 0.0, w - inset, h - inset);
    let top_clip = Rect::new(pad, pad, w - 2.0 * pad - inset, split_y - pad);
    let bottom_clip = Rect::new(pad, split_y, w - 2.0 * pad - inset, h - split_y - pad - inset);

    let (top, bottom) = if angle <= HALF_FOLD_DEG {
        // First half of the fold: the old top shrinks toward the hinge.
        (
            HalfPlan {
                clip: top_clip,
                glyph: current,
                v_scale: fold_scale(angle),
                pivot_y: split_y,
            },
            HalfPlan {
                clip: bottom_clip,
                glyph: current,
                v_scale: 1.0,
                pivot_y: split_y,
            },
        )
    } else {
        // Second half: the new bottom unfolds from the hinge.
        (
            HalfPlan {
                clip: top_clip,
                glyph: next,
                v_scale: 1.0,
                pivot_y: split_y,
            },
            HalfPlan {
                clip: bottom_clip,
                glyph: next,
                v_scale: fold_scale(FULL_FOLD_DEG - angle),
                pivot_y: split_y,
            },
        )
    };

    TilePlan {
        card,
        corner_radius: metrics.corner_radius * scale,
        font_px: metrics.font_px * scale,
        split_y,
        hinge_x: (
            HINGE_INSET_LEFT * scale,
            w - HINGE_INSET_RIGHT * scale,
        ),
        top,
        bottom,
    }
}

/// Plan a colon separator tile.
pub fn plan_colon(on: bool, metrics: &TileMetrics, scale: f32) -> ColonPlan {
    let w = metrics.colon_w * scale;
    let h = metrics.tile_h * scale;
    let dot_radius = (w.min(h) / 14.0 + 4.0 * scale).max(4.0);
    let x = w / 2.0;
    ColonPlan {
        tile: Rect::new(0.0, 0.0, w, h),
        on,
        dot_radius,
        dots: [(x, h * DOT_UPPER), (x, h * DOT_LOWER)],
    }
}
