//! imagediff-test - Regression test framework for imagediff
//!
//! Provides [`RegParams`], a check recorder modeled on indexed regression
//! runs, plus small fixture builders so tests can describe images and
//! masks inline instead of loading files.
//!
//! # Usage
//!
//! ```ignore
//! use imagediff_test::{RegParams, mask_from_rows};
//!
//! let mut rp = RegParams::new("conncomp");
//! let mask = mask_from_rows(&["#..", "..#"]).unwrap();
//! rp.compare_values(2.0, mask.count_differences() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every checked value

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use imagediff_core::{DifferenceMask, PixelGrid};

/// Build a mask from ASCII rows: `#` or `x` marks a set cell, anything
/// else is clear.
///
/// # Errors
///
/// Returns [`TestError::EmptyFixture`] for no rows / empty rows and
/// [`TestError::RaggedRows`] if rows differ in length.
pub fn mask_from_rows(rows: &[&str]) -> TestResult<DifferenceMask> {
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    if width == 0 {
        return Err(TestError::EmptyFixture);
    }

    let mut cells = Vec::with_capacity(width * rows.len());
    for (row, line) in rows.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            return Err(TestError::RaggedRows {
                row,
                expected: width,
                actual: len,
            });
        }
        cells.extend(line.chars().map(|c| c == '#' || c == 'x'));
    }

    DifferenceMask::from_cells(width as u32, rows.len() as u32, cells)
        .ok_or(TestError::EmptyFixture)
}

/// Build a grid filled with `background`, then overwrite the listed
/// `(x, y, pixel)` entries.
pub fn grid_with_pixels(
    width: u32,
    height: u32,
    background: u32,
    pixels: &[(u32, u32, u32)],
) -> TestResult<PixelGrid> {
    let mut grid = PixelGrid::filled(width, height, background)?.to_mut();
    for &(x, y, pixel) in pixels {
        grid.set_pixel(x, y, pixel)?;
    }
    Ok(grid.into())
}
