//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// An ASCII fixture row has the wrong length
    #[error("fixture row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// An ASCII fixture has no rows or empty rows
    #[error("fixture is empty")]
    EmptyFixture,

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imagediff_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
