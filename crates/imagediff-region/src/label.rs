//! Difference labeling
//!
//! A labeler turns a [`DifferenceMask`] into a [`LabelMap`]. Two
//! strategies are provided:
//!
//! - [`BinaryLabeler`]: every set cell gets label `1`, no grouping
//! - [`ConnectedComponentLabeler`]: one label per connected region

use crate::conncomp::{ConnectedComponentLabeler, ScanOrder};
use crate::error::{RegionError, RegionResult};
use imagediff_core::{DifferenceMask, LabelMap};
use std::fmt;
use std::str::FromStr;

/// Converts a difference mask into a label map.
pub trait DifferenceLabeler: Send + Sync {
    /// Label every set cell of `mask`; clear cells get label `0`.
    fn label(&self, mask: &DifferenceMask) -> LabelMap;
}

/// Labeler selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelerType {
    /// Flat binary labeling
    #[default]
    Basic,
    /// Connected-component labeling
    ConnectedComponent,
}

impl fmt::Display for LabelerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::ConnectedComponent => f.write_str("connected-component"),
        }
    }
}

impl FromStr for LabelerType {
    type Err = RegionError;

    fn from_str(s: &str) -> RegionResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "binary" => Ok(Self::Basic),
            "connected-component" | "connectedcomponent" | "connected" | "cc" => {
                Ok(Self::ConnectedComponent)
            }
            other => Err(RegionError::InvalidParameters(format!(
                "unrecognized labeler type: {other:?}"
            ))),
        }
    }
}

/// Labels every set cell `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryLabeler;

impl DifferenceLabeler for BinaryLabeler {
    fn label(&self, mask: &DifferenceMask) -> LabelMap {
        let labels = mask.cells().iter().map(|&set| u32::from(set)).collect();
        LabelMap::from_labels(mask.width(), mask.height(), labels)
            .unwrap_or_else(|| LabelMap::new(mask.width(), mask.height()))
    }
}

/// Reject a negative padding value.
pub(crate) fn validate_padding(name: &str, padding: i32) -> RegionResult<u32> {
    u32::try_from(padding).map_err(|_| {
        RegionError::InvalidParameters(format!("{name} must be non-negative: {padding}"))
    })
}

/// Build the labeler selected by `labeler_type`, scanning row-major.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `detection_padding` is
/// negative, whichever labeler is selected.
pub fn create_labeler(
    labeler_type: LabelerType,
    detection_padding: i32,
) -> RegionResult<Box<dyn DifferenceLabeler>> {
    create_labeler_with_order(labeler_type, detection_padding, ScanOrder::RowMajor)
}

/// Build the labeler selected by `labeler_type` with an explicit scan
/// order for connected-component labeling.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `detection_padding` is
/// negative.
pub fn create_labeler_with_order(
    labeler_type: LabelerType,
    detection_padding: i32,
    scan_order: ScanOrder,
) -> RegionResult<Box<dyn DifferenceLabeler>> {
    let padding = validate_padding("detection padding", detection_padding)?;
    Ok(match labeler_type {
        LabelerType::Basic => Box::new(BinaryLabeler),
        LabelerType::ConnectedComponent => {
            Box::new(ConnectedComponentLabeler::new(padding).with_scan_order(scan_order))
        }
    })
}
