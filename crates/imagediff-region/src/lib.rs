//! imagediff-region - Region labeling and bounding box extraction
//!
//! The second and third stages of the comparison pipeline:
//!
//! - **Labeling** ([`label`], [`conncomp`]): turn a difference mask into a
//!   label map, either flat or grouped into connected regions
//! - **Bounding boxes** ([`bounds`]): one box around all differences, or
//!   one per region

pub mod bounds;
pub mod conncomp;
pub mod error;
pub mod label;

// Re-export core types
pub use imagediff_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export labelers
pub use conncomp::{ConnectedComponentLabeler, ScanOrder};
pub use label::{
    BinaryLabeler, DifferenceLabeler, LabelerType, create_labeler, create_labeler_with_order,
};

// Re-export bounding box identifiers
pub use bounds::{
    BoundingBoxIdentifier, BoundingBoxMode, MAX_BOUNDING_BOX_PADDING,
    MultipleBoundingBoxIdentifier, SingleBoundingBoxIdentifier, create_identifier,
};
