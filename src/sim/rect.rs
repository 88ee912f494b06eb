//! Axis-aligned rectangle geometry for platforms and entity bounds
//!
//! World coordinates put the origin at the top-left corner of the world with
//! y growing downward, so `top < bottom` for any rectangle with positive height.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f32,
    /// Top edge (distance from world top)
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Strict horizontal overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() > other.left && self.left < other.right()
    }

    /// All four components are finite and the size is strictly positive
    pub fn is_well_formed(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}
