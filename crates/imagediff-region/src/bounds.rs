//! Bounding box extraction from label maps
//!
//! - [`SingleBoundingBoxIdentifier`]: one box enclosing every labeled cell
//! - [`MultipleBoundingBoxIdentifier`]: one box per distinct label, in
//!   ascending label order
//!
//! Boxes are expanded by the configured padding and are not clipped to the
//! image, so they may carry negative coordinates.

use crate::error::{RegionError, RegionResult};
use crate::label::validate_padding;
use imagediff_core::{BoundingBox, LabelMap};
use log::trace;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Largest accepted bounding box padding.
///
/// A padded box spans its extent plus twice the padding, which must stay
/// within `i32`.
pub const MAX_BOUNDING_BOX_PADDING: i32 = i32::MAX / 4;

/// Check a bounding box padding against `0..=MAX_BOUNDING_BOX_PADDING`.
fn validate_box_padding(padding: i32) -> RegionResult<i32> {
    validate_padding("bounding box padding", padding)?;
    if padding > MAX_BOUNDING_BOX_PADDING {
        return Err(RegionError::InvalidParameters(format!(
            "bounding box padding must be at most {MAX_BOUNDING_BOX_PADDING}: {padding}"
        )));
    }
    Ok(padding)
}

/// Turns a label map into bounding boxes.
pub trait BoundingBoxIdentifier: Send + Sync {
    /// Boxes around the labeled cells of `labels`; empty when no cell is
    /// labeled.
    fn create_bounding_boxes(&self, labels: &LabelMap) -> Vec<BoundingBox>;
}

/// Bounding box mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundingBoxMode {
    /// One box around all differences
    #[default]
    Single,
    /// One box per labeled region
    Multiple,
}

impl fmt::Display for BoundingBoxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Multiple => f.write_str("multiple"),
        }
    }
}

impl FromStr for BoundingBoxMode {
    type Err = RegionError;

    fn from_str(s: &str) -> RegionResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multiple" | "multi" => Ok(Self::Multiple),
            other => Err(RegionError::InvalidParameters(format!(
                "unrecognized bounding box mode: {other:?}"
            ))),
        }
    }
}

/// Inclusive extent of a set of cells
#[derive(Debug, Clone, Copy)]
struct Extent {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

impl Extent {
    fn at(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn to_box(self, padding: i32) -> BoundingBox {
        BoundingBox::from_corners(
            self.min_x as i32,
            self.min_y as i32,
            self.max_x as i32,
            self.max_y as i32,
        )
        .expand(padding)
    }
}

/// Visit `(x, y, label)` for every labeled cell in row-major order.
fn for_each_labeled<F: FnMut(u32, u32, u32)>(labels: &LabelMap, mut f: F) {
    let width = labels.width() as usize;
    if width == 0 {
        return;
    }
    for (idx, &label) in labels.labels().iter().enumerate() {
        if label != 0 {
            f((idx % width) as u32, (idx / width) as u32, label);
        }
    }
}

/// Produces at most one box enclosing every labeled cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleBoundingBoxIdentifier {
    padding: i32,
}

impl SingleBoundingBoxIdentifier {
    /// Create an identifier that expands its box by `padding`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `padding` is negative
    /// or above [`MAX_BOUNDING_BOX_PADDING`].
    pub fn new(padding: i32) -> RegionResult<Self> {
        Ok(Self {
            padding: validate_box_padding(padding)?,
        })
    }

    /// The padding added on each side.
    pub fn padding(&self) -> i32 {
        self.padding
    }
}

impl BoundingBoxIdentifier for SingleBoundingBoxIdentifier {
    fn create_bounding_boxes(&self, labels: &LabelMap) -> Vec<BoundingBox> {
        let mut extent: Option<Extent> = None;
        for_each_labeled(labels, |x, y, _| {
            extent
                .get_or_insert_with(|| Extent::at(x, y))
                .include(x, y);
        });
        extent
            .map(|e| vec![e.to_box(self.padding)])
            .unwrap_or_default()
    }
}

/// Produces one box per distinct label.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultipleBoundingBoxIdentifier {
    padding: i32,
}

impl MultipleBoundingBoxIdentifier {
    /// Create an identifier that expands each box by `padding`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `padding` is negative
    /// or above [`MAX_BOUNDING_BOX_PADDING`].
    pub fn new(padding: i32) -> RegionResult<Self> {
        Ok(Self {
            padding: validate_box_padding(padding)?,
        })
    }

    /// The padding added on each side.
    pub fn padding(&self) -> i32 {
        self.padding
    }
}

impl BoundingBoxIdentifier for MultipleBoundingBoxIdentifier {
    fn create_bounding_boxes(&self, labels: &LabelMap) -> Vec<BoundingBox> {
        let mut extents: BTreeMap<u32, Extent> = BTreeMap::new();
        for_each_labeled(labels, |x, y, label| {
            extents
                .entry(label)
                .and_modify(|e| e.include(x, y))
                .or_insert_with(|| Extent::at(x, y));
        });
        trace!("bounding boxes: {} labeled regions", extents.len());
        extents
            .into_values()
            .map(|e| e.to_box(self.padding))
            .collect()
    }
}

/// Build the identifier selected by `mode`.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if `bounding_box_padding`
/// is negative.
pub fn create_identifier(
    mode: BoundingBoxMode,
    bounding_box_padding: i32,
) -> RegionResult<Box<dyn BoundingBoxIdentifier>> {
    Ok(match mode {
        BoundingBoxMode::Single => {
            Box::new(SingleBoundingBoxIdentifier::new(bounding_box_padding)?)
        }
        BoundingBoxMode::Multiple => {
            Box::new(MultipleBoundingBoxIdentifier::new(bounding_box_padding)?)
        }
    })
}
