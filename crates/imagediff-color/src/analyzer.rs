//! Pixel difference analysis
//!
//! An analyzer walks two equally-sized grids in lockstep and flags every
//! position whose pixels differ under its criterion:
//!
//! - [`ExactMatchAnalyzer`]: any differing channel, alpha included
//! - [`Cie76Analyzer`]: CIE76 distance at or above a just-noticeable
//!   difference threshold
//!
//! Use [`create_analyzer`] to build one from an [`AnalyzerType`].

use crate::colorspace::{delta_e_76, pixel_to_lab};
use crate::error::{ColorError, ColorResult};
use imagediff_core::{DifferenceMask, PixelGrid, color};
use std::fmt;
use std::str::FromStr;

/// Commonly cited CIE76 just-noticeable difference.
pub const DEFAULT_JUST_NOTICEABLE_DIFFERENCE: f64 = 2.3;

/// Produces a difference mask from two grids of identical dimensions.
///
/// Callers are responsible for checking dimensions first.
pub trait DifferenceAnalyzer: Send + Sync {
    /// Flag every pixel position at which `first` and `second` differ.
    fn analyze(&self, first: &PixelGrid, second: &PixelGrid) -> DifferenceMask;
}

/// Analyzer selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalyzerType {
    /// Bitwise pixel equality
    #[default]
    ExactMatch,
    /// CIE76 perceptual distance
    Cie76,
}

impl fmt::Display for AnalyzerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactMatch => f.write_str("exact-match"),
            Self::Cie76 => f.write_str("cie76"),
        }
    }
}

impl FromStr for AnalyzerType {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "exact-match" | "exactmatch" => Ok(Self::ExactMatch),
            "cie76" | "perceptual" => Ok(Self::Cie76),
            other => Err(ColorError::InvalidParameters(format!(
                "unrecognized analyzer type: {other:?}"
            ))),
        }
    }
}

/// Flags pixels whose packed RGBA values differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchAnalyzer;

impl DifferenceAnalyzer for ExactMatchAnalyzer {
    fn analyze(&self, first: &PixelGrid, second: &PixelGrid) -> DifferenceMask {
        debug_assert!(first.same_size(second));
        let cells = first
            .data()
            .iter()
            .zip(second.data())
            .map(|(a, b)| a != b)
            .collect();
        DifferenceMask::from_cells(first.width(), first.height(), cells)
            .unwrap_or_else(|| DifferenceMask::new(first.width(), first.height()))
    }
}

/// Flags pixels whose CIE76 distance is `>=` the configured threshold.
///
/// Alpha does not participate. Pixels with identical RGB are never
/// flagged, even with a zero threshold.
#[derive(Debug, Clone, Copy)]
pub struct Cie76Analyzer {
    just_noticeable_difference: f64,
}

impl Cie76Analyzer {
    /// Create an analyzer with the given threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] if the threshold is
    /// negative or not finite.
    pub fn new(just_noticeable_difference: f64) -> ColorResult<Self> {
        if !just_noticeable_difference.is_finite() || just_noticeable_difference < 0.0 {
            return Err(ColorError::InvalidParameters(format!(
                "just noticeable difference must be finite and non-negative: {just_noticeable_difference}"
            )));
        }
        Ok(Self {
            just_noticeable_difference,
        })
    }

    /// The configured threshold.
    pub fn just_noticeable_difference(&self) -> f64 {
        self.just_noticeable_difference
    }

    /// Decide whether two packed pixels differ perceptually.
    #[inline]
    pub fn pixels_differ(&self, first: u32, second: u32) -> bool {
        if color::extract_rgb(first) == color::extract_rgb(second) {
            return false;
        }
        delta_e_76(pixel_to_lab(first), pixel_to_lab(second)) >= self.just_noticeable_difference
    }
}

impl Default for Cie76Analyzer {
    fn default() -> Self {
        Self {
            just_noticeable_difference: DEFAULT_JUST_NOTICEABLE_DIFFERENCE,
        }
    }
}

impl DifferenceAnalyzer for Cie76Analyzer {
    fn analyze(&self, first: &PixelGrid, second: &PixelGrid) -> DifferenceMask {
        debug_assert!(first.same_size(second));
        let cells = first
            .data()
            .iter()
            .zip(second.data())
            .map(|(&a, &b)| self.pixels_differ(a, b))
            .collect();
        DifferenceMask::from_cells(first.width(), first.height(), cells)
            .unwrap_or_else(|| DifferenceMask::new(first.width(), first.height()))
    }
}

/// Build the analyzer selected by `analyzer_type`.
///
/// `just_noticeable_difference` is only used by [`AnalyzerType::Cie76`],
/// but it is checked for every type. This is stricter than checking the
/// selector alone: [`AnalyzerType::ExactMatch`] with a negative threshold
/// is rejected too.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] for a negative or non-finite
/// threshold, whichever analyzer is selected.
pub fn create_analyzer(
    analyzer_type: AnalyzerType,
    just_noticeable_difference: f64,
) -> ColorResult<Box<dyn DifferenceAnalyzer>> {
    let cie76 = Cie76Analyzer::new(just_noticeable_difference)?;
    Ok(match analyzer_type {
        AnalyzerType::ExactMatch => Box::new(ExactMatchAnalyzer),
        AnalyzerType::Cie76 => Box::new(cie76),
    })
}
