//! Connected component labeling
//!
//! Groups set cells of a [`DifferenceMask`] into regions with a two-pass
//! raster algorithm:
//!
//! 1. A single forward scan gives each set cell either a fresh provisional
//!    label or the smallest label among its already-visited set neighbors,
//!    and records every neighbor label as equivalent.
//! 2. A second scan rewrites each provisional label to the smallest label
//!    of its equivalence class.
//!
//! Neighbors are only looked for among cells the scan has already visited
//! (the causal neighborhood). For each offset `k` in `1..=1 + padding`
//! the labeler inspects the four causal directions at distance `k`, so a
//! padding above zero bridges gaps of up to `padding` clear cells along
//! rows, columns and diagonals. The resulting partition does not depend
//! on the scan order.

use imagediff_core::{DifferenceMask, LabelMap};
use log::trace;
use std::fmt;
use std::str::FromStr;

use crate::error::{RegionError, RegionResult};
use crate::label::DifferenceLabeler;

/// Raster scan order for the labeling passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanOrder {
    /// Rows top to bottom, each row left to right
    #[default]
    RowMajor,
    /// Columns left to right, each column top to bottom
    ColumnMajor,
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowMajor => f.write_str("row-major"),
            Self::ColumnMajor => f.write_str("column-major"),
        }
    }
}

impl FromStr for ScanOrder {
    type Err = RegionError;

    fn from_str(s: &str) -> RegionResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row-major" | "rowmajor" | "row" => Ok(Self::RowMajor),
            "column-major" | "columnmajor" | "column" => Ok(Self::ColumnMajor),
            other => Err(RegionError::InvalidParameters(format!(
                "unrecognized scan order: {other:?}"
            ))),
        }
    }
}

impl ScanOrder {
    /// Causal neighbor offsets `(dx, dy)` at distance `k`.
    fn causal_offsets(self, k: i64) -> [(i64, i64); 4] {
        match self {
            // left, up-left, up, up-right
            Self::RowMajor => [(-k, 0), (-k, -k), (0, -k), (k, -k)],
            // up, up-left, left, down-left
            Self::ColumnMajor => [(0, -k), (-k, -k), (-k, 0), (-k, k)],
        }
    }

    /// Visit every `(x, y)` of a `width x height` grid in this order.
    fn for_each_cell<F: FnMut(u32, u32)>(self, width: u32, height: u32, mut f: F) {
        match self {
            Self::RowMajor => {
                for y in 0..height {
                    for x in 0..width {
                        f(x, y);
                    }
                }
            }
            Self::ColumnMajor => {
                for x in 0..width {
                    for y in 0..height {
                        f(x, y);
                    }
                }
            }
        }
    }
}

/// Label equivalences as a disjoint-set forest over provisional labels.
///
/// The root of every set is its smallest label. Index 0 is the unused
/// background slot.
#[derive(Debug)]
struct Equivalences {
    parent: Vec<u32>,
}

impl Equivalences {
    fn new() -> Self {
        Self { parent: vec![0] }
    }

    /// Allocate the next label as a singleton class.
    fn make_label(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    fn provisional_count(&self) -> usize {
        self.parent.len() - 1
    }

    /// Number of classes left after all unions.
    fn class_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .skip(1)
            .filter(|&(label, &parent)| label as u32 == parent)
            .count()
    }

    /// Smallest label equivalent to `label`, compressing the path walked.
    fn find(&mut self, label: u32) -> u32 {
        let mut root = label;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        let mut current = label;
        while self.parent[current as usize] != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra < rb {
            self.parent[rb as usize] = ra;
        } else if rb < ra {
            self.parent[ra as usize] = rb;
        }
    }
}

/// Connected-component labeler with a configurable adjacency radius.
///
/// The equivalence table lives only inside [`DifferenceLabeler::label`],
/// so one labeler may be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectedComponentLabeler {
    padding: u32,
    scan_order: ScanOrder,
}

impl ConnectedComponentLabeler {
    /// Create a labeler bridging gaps of up to `padding` cells.
    pub fn new(padding: u32) -> Self {
        Self {
            padding,
            scan_order: ScanOrder::RowMajor,
        }
    }

    /// Set the scan order
    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.scan_order = scan_order;
        self
    }

    /// The adjacency padding.
    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// The scan order.
    pub fn scan_order(&self) -> ScanOrder {
        self.scan_order
    }
}

impl DifferenceLabeler for ConnectedComponentLabeler {
    fn label(&self, mask: &DifferenceMask) -> LabelMap {
        let width = mask.width();
        let height = mask.height();
        // Offsets at or past the longer side never land inside the grid.
        let reach = (self.padding as i64 + 1).min(width.max(height) as i64);

        let mut labels = LabelMap::new(width, height);
        let mut equivalences = Equivalences::new();
        let mut neighbor_labels: Vec<u32> = Vec::with_capacity(4 * reach as usize);

        // First pass: provisional labels and equivalences
        self.scan_order.for_each_cell(width, height, |x, y| {
            if !mask.get(x, y) {
                return;
            }

            neighbor_labels.clear();
            for k in 1..=reach {
                for (dx, dy) in self.scan_order.causal_offsets(k) {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    if mask.get(nx, ny) {
                        neighbor_labels.push(labels.get(nx, ny));
                    }
                }
            }

            match neighbor_labels.iter().copied().min() {
                None => {
                    let label = equivalences.make_label();
                    labels.set(x, y, label);
                }
                Some(min_label) => {
                    labels.set(x, y, min_label);
                    for &label in &neighbor_labels {
                        equivalences.union(min_label, label);
                    }
                }
            }
        });

        // Second pass: resolve to the smallest equivalent label
        for label in labels.labels_mut() {
            if *label != 0 {
                *label = equivalences.find(*label);
            }
        }

        trace!(
            "connected components: {} provisional labels, {} regions over {}x{} (padding {}, {:?})",
            equivalences.provisional_count(),
            equivalences.class_count(),
            width,
            height,
            self.padding,
            self.scan_order
        );

        labels
    }
}
