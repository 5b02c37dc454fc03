//! imagediff core - Basic data structures for image comparison
//!
//! This crate provides the fundamental data structures shared by every
//! stage of the difference pipeline:
//!
//! - [`PixelGrid`] / [`PixelGridMut`] - RGBA image container (immutable / mutable)
//! - [`DifferenceMask`] - per-pixel "differs" flags
//! - [`LabelMap`] - region labels (0 = background)
//! - [`BoundingBox`] - rectangles around differing regions
//! - [`Color`] and the [`color`] channel helpers

pub mod box_;
pub mod color;
pub mod error;
pub mod grid;
pub mod labels;
pub mod mask;

pub use box_::BoundingBox;
pub use color::Color;
pub use error::{Error, Result};
pub use grid::{ImageFormat, PixelGrid, PixelGridMut};
pub use labels::LabelMap;
pub use mask::DifferenceMask;
