//! imagediff - Find where two images differ
//!
//! Compares two equally-sized RGBA images and reports axis-aligned
//! rectangles around the regions that differ. The comparison runs in three
//! configurable stages:
//!
//! - Difference analysis: exact pixel equality or CIE76 perceptual distance
//! - Labeling: all differences as one region, or connected components with
//!   an adjustable gap tolerance
//! - Bounding boxes: one box around everything, or one per region
//!
//! # Example
//!
//! ```
//! use imagediff::{BoundingBoxMode, CompareOptions, ImageComparer, LabelerType, PixelGrid};
//! use imagediff::color::compose_rgb;
//!
//! let first = PixelGrid::filled(8, 8, compose_rgb(255, 255, 255)).unwrap();
//! let mut second = first.to_mut();
//! second.set_pixel(2, 3, compose_rgb(0, 0, 0)).unwrap();
//! let second: PixelGrid = second.into();
//!
//! let comparer = ImageComparer::new(
//!     CompareOptions::default()
//!         .with_labeler(LabelerType::ConnectedComponent)
//!         .with_bounding_box_mode(BoundingBoxMode::Multiple)
//!         .with_bounding_box_padding(0),
//! )
//! .unwrap();
//!
//! let boxes = comparer.compare(Some(&first), Some(&second)).unwrap();
//! assert_eq!(boxes.len(), 1);
//! assert_eq!((boxes[0].x, boxes[0].y), (2, 3));
//! assert!(!comparer.equals(Some(&first), Some(&second)));
//! ```

pub mod comparer;
pub mod error;
pub mod options;

pub use comparer::ImageComparer;
pub use error::{CompareError, CompareResult};
pub use options::{CompareOptions, DEFAULT_BOUNDING_BOX_PADDING, DEFAULT_DETECTION_PADDING};

// Re-export core types (primary data structures used everywhere)
pub use imagediff_core::*;

// Strategy selectors used in CompareOptions
pub use imagediff_color::{AnalyzerType, DEFAULT_JUST_NOTICEABLE_DIFFERENCE};
pub use imagediff_region::{BoundingBoxMode, LabelerType, MAX_BOUNDING_BOX_PADDING, ScanOrder};

// Re-export stage crates as modules to avoid name conflicts
pub use imagediff_color as analysis;
pub use imagediff_io as io;
pub use imagediff_region as region;
