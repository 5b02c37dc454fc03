//! LabelMap - region labels for a difference mask
//!
//! Each cell holds `0` for background or a positive label naming the
//! region the cell belongs to.

use std::collections::{BTreeMap, BTreeSet};

/// Integer label grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    width: u32,
    height: u32,
    labels: Vec<u32>,
}

impl LabelMap {
    /// Create an all-background label map.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: vec![0; width as usize * height as usize],
        }
    }

    /// Build a label map from row-major labels.
    ///
    /// Returns `None` if `labels.len() != width * height`.
    pub fn from_labels(width: u32, height: u32, labels: Vec<u32>) -> Option<Self> {
        (labels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            labels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major labels.
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Mutable row-major labels.
    #[inline]
    pub fn labels_mut(&mut self) -> &mut [u32] {
        &mut self.labels
    }

    /// Get the label at (x, y); out-of-bounds reads as background.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        if x < self.width && y < self.height {
            self.labels[self.index(x, y)]
        } else {
            0
        }
    }

    /// Set the label at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, label: u32) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.labels[idx] = label;
        }
    }

    /// Largest label present (0 if none).
    pub fn max_label(&self) -> u32 {
        self.labels.iter().copied().max().unwrap_or(0)
    }

    /// Distinct positive labels in ascending order.
    pub fn distinct_labels(&self) -> Vec<u32> {
        self.labels
            .iter()
            .copied()
            .filter(|&l| l > 0)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Cells grouped by positive label, keyed in ascending label order.
    /// Cells within a group are listed row-major.
    pub fn regions(&self) -> BTreeMap<u32, Vec<(u32, u32)>> {
        let mut regions: BTreeMap<u32, Vec<(u32, u32)>> = BTreeMap::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let label = self.labels[self.index(x, y)];
                if label > 0 {
                    regions.entry(label).or_default().push((x, y));
                }
            }
        }
        regions
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
