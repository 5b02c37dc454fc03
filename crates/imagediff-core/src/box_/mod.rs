//! BoundingBox - axis-aligned rectangles around differing regions
//!
//! Coordinates are signed: a padded box may extend past the image edges.
//! Nothing here clamps to image bounds except [`BoundingBox::clip`].
//! Edge arithmetic saturates at the `i32` range.

mod draw;

use crate::error::{Error, Result};

/// A rectangle region
///
/// A small `Copy` type. `w` and `h` are the corner-to-corner extents, so a
/// box around a single pixel has `w == 0` and `h == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl BoundingBox {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box from two corner points
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x, w) = if x1 <= x2 {
            (x1, x2 - x1)
        } else {
            (x2, x1 - x2)
        };
        let (y, h) = if y1 <= y2 {
            (y1, y2 - y1)
        } else {
            (y2, y1 - y2)
        };
        Self { x, y, w, h }
    }

    /// Right edge coordinate (`x + w`)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Bottom edge coordinate (`y + h`)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Check if a point lies on or inside the box edges
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Expand the box by a margin on all sides
    pub fn expand(&self, margin: i32) -> BoundingBox {
        BoundingBox {
            x: self.x.saturating_sub(margin),
            y: self.y.saturating_sub(margin),
            w: self.w.saturating_add(margin.saturating_mul(2)),
            h: self.h.saturating_add(margin.saturating_mul(2)),
        }
    }

    /// Clip the box edges to `[0, width) x [0, height)`.
    ///
    /// Returns `None` if the box lies entirely outside the image.
    pub fn clip(&self, width: i32, height: i32) -> Option<BoundingBox> {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let right = self.right().min(width - 1);
        let bottom = self.bottom().min(height - 1);

        if x <= right && y <= bottom {
            Some(BoundingBox {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }
}
