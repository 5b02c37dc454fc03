//! imagediff-color - Color conversion and difference analysis
//!
//! This crate provides the first stage of the comparison pipeline:
//!
//! - **Color space conversion** ([`colorspace`]): RGB -> XYZ -> CIE L*a*b*,
//!   CIE76 distance
//! - **Difference analysis** ([`analyzer`]): exact and perceptual analyzers
//!   producing a [`DifferenceMask`](imagediff_core::DifferenceMask)

pub mod analyzer;
pub mod colorspace;
pub mod error;

// Re-export core types
pub use imagediff_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    Lab, REF_X, REF_Y, REF_Z, Xyz, delta_e_76, pixel_to_lab, rgb_to_lab, rgb_to_xyz, xyz_to_lab,
};

// Re-export analyzers
pub use analyzer::{
    AnalyzerType, Cie76Analyzer, DEFAULT_JUST_NOTICEABLE_DIFFERENCE, DifferenceAnalyzer,
    ExactMatchAnalyzer, create_analyzer,
};
