//! Comparison options
//!
//! [`CompareOptions`] selects the strategy for each pipeline stage and
//! carries their parameters. It is checked once, when an
//! [`ImageComparer`](crate::ImageComparer) is built.

use crate::error::{CompareError, CompareResult};
use imagediff_color::{AnalyzerType, DEFAULT_JUST_NOTICEABLE_DIFFERENCE};
use imagediff_core::Color;
use imagediff_region::{BoundingBoxMode, LabelerType, MAX_BOUNDING_BOX_PADDING, ScanOrder};
use std::fmt::Display;
use std::str::FromStr;

/// Default adjacency radius for connected-component labeling
pub const DEFAULT_DETECTION_PADDING: i32 = 2;

/// Default margin added around each bounding box
pub const DEFAULT_BOUNDING_BOX_PADDING: i32 = 2;

/// Options for [`ImageComparer`](crate::ImageComparer)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// How pixel differences are detected
    pub analyzer: AnalyzerType,
    /// CIE76 threshold used by [`AnalyzerType::Cie76`]
    pub just_noticeable_difference: f64,
    /// How differing pixels are grouped
    pub labeler: LabelerType,
    /// Gap, in pixels, bridged when grouping differences
    pub detection_padding: i32,
    /// One box overall or one per region
    pub bounding_box_mode: BoundingBoxMode,
    /// Margin added on each side of every box
    pub bounding_box_padding: i32,
    /// Outline color for rendered boxes
    pub bounding_box_color: Color,
    /// Scan order of the connected-component labeler
    pub scan_order: ScanOrder,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            analyzer: AnalyzerType::ExactMatch,
            just_noticeable_difference: DEFAULT_JUST_NOTICEABLE_DIFFERENCE,
            labeler: LabelerType::Basic,
            detection_padding: DEFAULT_DETECTION_PADDING,
            bounding_box_mode: BoundingBoxMode::Single,
            bounding_box_padding: DEFAULT_BOUNDING_BOX_PADDING,
            bounding_box_color: Color::RED,
            scan_order: ScanOrder::RowMajor,
        }
    }
}

fn parse_setting<T>(key: &str, value: &str) -> CompareResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse::<T>()
        .map_err(|e| CompareError::InvalidConfiguration(format!("{key}: {e}")))
}

impl CompareOptions {
    /// Set the analyzer
    pub fn with_analyzer(mut self, analyzer: AnalyzerType) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Set the CIE76 threshold
    pub fn with_just_noticeable_difference(mut self, jnd: f64) -> Self {
        self.just_noticeable_difference = jnd;
        self
    }

    /// Set the labeler
    pub fn with_labeler(mut self, labeler: LabelerType) -> Self {
        self.labeler = labeler;
        self
    }

    /// Set the detection padding
    pub fn with_detection_padding(mut self, padding: i32) -> Self {
        self.detection_padding = padding;
        self
    }

    /// Set the bounding box mode
    pub fn with_bounding_box_mode(mut self, mode: BoundingBoxMode) -> Self {
        self.bounding_box_mode = mode;
        self
    }

    /// Set the bounding box padding
    pub fn with_bounding_box_padding(mut self, padding: i32) -> Self {
        self.bounding_box_padding = padding;
        self
    }

    /// Set the outline color used by
    /// [`compare_and_render`](crate::ImageComparer::compare_and_render)
    pub fn with_bounding_box_color(mut self, color: Color) -> Self {
        self.bounding_box_color = color;
        self
    }

    /// Set the connected-component scan order
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }

    /// Apply a setting given as strings, as read from a configuration
    /// file or command line.
    ///
    /// Recognized keys: `analyzer`, `just-noticeable-difference`,
    /// `labeler`, `detection-padding`, `bounding-box-mode`,
    /// `bounding-box-padding`, `scan-order`. Underscores may be used in
    /// place of dashes.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidConfiguration`] for an unknown key
    /// or a value that does not parse.
    pub fn with_setting(mut self, key: &str, value: &str) -> CompareResult<Self> {
        let normalized = key.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "analyzer" => self.analyzer = parse_setting(key, value)?,
            "just-noticeable-difference" | "jnd" => {
                self.just_noticeable_difference = parse_setting(key, value.trim())?
            }
            "labeler" => self.labeler = parse_setting(key, value)?,
            "detection-padding" => self.detection_padding = parse_setting(key, value.trim())?,
            "bounding-box-mode" => self.bounding_box_mode = parse_setting(key, value)?,
            "bounding-box-padding" => {
                self.bounding_box_padding = parse_setting(key, value.trim())?
            }
            "scan-order" => self.scan_order = parse_setting(key, value)?,
            _ => {
                return Err(CompareError::InvalidConfiguration(format!(
                    "unknown setting: {key:?}"
                )));
            }
        }
        Ok(self)
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidConfiguration`] if a padding is
    /// negative, the bounding box padding exceeds
    /// [`MAX_BOUNDING_BOX_PADDING`], or the threshold is negative or not
    /// finite.
    pub fn validate(&self) -> CompareResult<()> {
        if !self.just_noticeable_difference.is_finite() || self.just_noticeable_difference < 0.0
        {
            return Err(CompareError::InvalidConfiguration(format!(
                "just noticeable difference must be finite and non-negative, got {}",
                self.just_noticeable_difference
            )));
        }
        if self.detection_padding < 0 {
            return Err(CompareError::InvalidConfiguration(format!(
                "detection padding must be non-negative, got {}",
                self.detection_padding
            )));
        }
        if !(0..=MAX_BOUNDING_BOX_PADDING).contains(&self.bounding_box_padding) {
            return Err(CompareError::InvalidConfiguration(format!(
                "bounding box padding must be in 0..={MAX_BOUNDING_BOX_PADDING}, got {}",
                self.bounding_box_padding
            )));
        }
        Ok(())
    }
}
