//! Error types for image comparison

use thiserror::Error;

/// Errors returned while configuring or running a comparison
#[derive(Debug, Error)]
pub enum CompareError {
    /// The options cannot produce a working comparer
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// One of the images was not supplied
    #[error("missing input: {0}")]
    NullInput(&'static str),

    /// The images do not have the same dimensions
    #[error("image size mismatch: {}x{} vs {}x{}", .first.0, .first.1, .second.0, .second.1)]
    SizeMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imagediff_core::Error),

    /// Color / analyzer error
    #[error("color error: {0}")]
    Color(#[from] imagediff_color::ColorError),

    /// Labeling / bounding box error
    #[error("region error: {0}")]
    Region(#[from] imagediff_region::RegionError),

    /// Image file error
    #[error("I/O error: {0}")]
    Io(#[from] imagediff_io::IoError),
}

/// Result type for comparisons
pub type CompareResult<T> = Result<T, CompareError>;
