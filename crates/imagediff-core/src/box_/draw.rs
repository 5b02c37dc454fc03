//! Box outline rendering
//!
//! Draws rectangle outlines onto a mutable grid. Edges lying outside the
//! image are skipped; the visible part of each edge is drawn.

use super::BoundingBox;
use crate::color::Color;
use crate::grid::PixelGridMut;

impl PixelGridMut {
    /// Draw the 1-pixel outline of `b` in `color`.
    ///
    /// The outline covers columns `b.x..=b.right()` and rows
    /// `b.y..=b.bottom()`.
    pub fn draw_box(&mut self, b: &BoundingBox, color: Color) {
        let (width, height) = (self.width() as i32, self.height() as i32);
        let Some(visible) = b.clip(width, height) else {
            return;
        };
        let pixel = color.to_pixel();

        for x in visible.x..=visible.right() {
            if b.y >= 0 {
                self.set_pixel_unchecked(x as u32, b.y as u32, pixel);
            }
            if b.bottom() < height {
                self.set_pixel_unchecked(x as u32, b.bottom() as u32, pixel);
            }
        }
        for y in visible.y..=visible.bottom() {
            if b.x >= 0 {
                self.set_pixel_unchecked(b.x as u32, y as u32, pixel);
            }
            if b.right() < width {
                self.set_pixel_unchecked(b.right() as u32, y as u32, pixel);
            }
        }
    }

    /// Draw the outline of every box in `boxes`.
    pub fn draw_boxes(&mut self, boxes: &[BoundingBox], color: Color) {
        for b in boxes {
            self.draw_box(b, color);
        }
    }
}
