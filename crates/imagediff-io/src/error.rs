//! I/O error types
//!
//! Codec errors from every format module are flattened into [`IoError`]
//! so callers handle a single type.

use thiserror::Error;

/// Failure while reading, decoding, encoding or writing an image
#[derive(Error, Debug)]
pub enum IoError {
    /// The file could not be opened, read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format not recognized, or its feature is disabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed header or truncated data
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The PNG decoder rejected the stream
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder failed
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded dimensions or buffers were rejected by the grid
    #[error("core error: {0}")]
    Core(#[from] imagediff_core::Error),
}

/// Result alias for image I/O
pub type IoResult<T> = Result<T, IoError>;
