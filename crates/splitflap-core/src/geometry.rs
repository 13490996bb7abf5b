//! Face geometry: base card dimensions, the shared scale factor, and the
//! scaled layout of the eight slots.
//!
//! All dimensions are surface pixels with y growing downward. Base
//! values describe the face at scale 1.0; every consumer multiplies by
//! the engine's scale and never mutates it.

use serde::{Deserialize, Serialize};

use crate::ids::{Slot, COLON_SLOTS, DIGIT_SLOTS, FACE_ORDER};

/// Lower bound of the shared scale factor.
pub const MIN_SCALE: f32 = 0.5;

/// Upper bound of the shared scale factor.
pub const MAX_SCALE: f32 = 3.0;

#[inline]
pub fn clamp_scale(scale: f32) -> f32 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Axis-aligned rectangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }
}

/// Base (scale 1.0) dimensions of the face.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileMetrics {
    pub tile_w: f32,
    pub tile_h: f32,
    pub colon_w: f32,
    /// Glyph size in px at scale 1.0.
    pub font_px: f32,
    /// Inset between the tile bounds and the glyph clip region.
    pub padding: f32,
    pub corner_radius: f32,
    /// Gap kept free along the card's right/bottom edges.
    pub card_inset: f32,
    /// Hinge position as a fraction of tile height from the top.
    pub split_ratio: f32,
    /// Outer margin around the face.
    pub margin: f32,
    /// Horizontal gap between neighboring slots.
    pub spacing: f32,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self {
            tile_w: 180.0,
            tile_h: 240.0,
            colon_w: 30.0,
            font_px: 140.0,
            padding: 22.0,
            corner_radius: 22.0,
            card_inset: 4.0,
            split_ratio: 0.52,
            margin: 20.0,
            spacing: 20.0,
        }
    }
}

impl TileMetrics {
    /// Hinge line height within a tile at the given scale.
    #[inline]
    pub fn split_y(&self, scale: f32) -> f32 {
        self.tile_h * scale * self.split_ratio
    }
}

/// Scaled positions of every slot plus the overall face size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaceLayout {
    pub digits: [Rect; DIGIT_SLOTS],
    pub colons: [Rect; COLON_SLOTS],
    pub width: f32,
    pub height: f32,
}

impl FaceLayout {
    /// Lay the face out left to right in [`FACE_ORDER`].
    pub fn compute(metrics: &TileMetrics, scale: f32) -> Self {
        let margin = metrics.margin * scale;
        let spacing = metrics.spacing * scale;
        let tile_w = metrics.tile_w * scale;
        let tile_h = metrics.tile_h * scale;
        let colon_w = metrics.colon_w * scale;

        let mut digits = [Rect::default(); DIGIT_SLOTS];
        let mut colons = [Rect::default(); COLON_SLOTS];
        let mut x = margin;
        for slot in FACE_ORDER {
            match slot {
                Slot::Digit(d) => {
                    digits[d.index()] = Rect::new(x, margin, tile_w, tile_h);
                    x += tile_w + spacing;
                }
                Slot::Colon(c) => {
                    colons[c.index()] = Rect::new(x, margin, colon_w, tile_h);
                    x += colon_w + spacing;
                }
            }
        }
        Self {
            digits,
            colons,
            width: x - spacing + margin,
            height: tile_h + 2.0 * margin,
        }
    }
}
