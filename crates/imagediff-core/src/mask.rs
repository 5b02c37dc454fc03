//! DifferenceMask - per-pixel "differs" flags
//!
//! A boolean grid with the same dimensions as the compared images. A set
//! cell at (x, y) means the two pixels at (x, y) differ under the active
//! analyzer.

/// Boolean grid marking differing pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferenceMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl DifferenceMask {
    /// Create an all-clear mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Build a mask from a predicate evaluated at every (x, y).
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a mask from row-major flags.
    ///
    /// Returns `None` if `cells.len() != width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            cells,
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

    /// Row-major flags.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Get the flag at (x, y); out-of-bounds reads as clear.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    /// Set the flag at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = value;
        }
    }

    /// Number of set cells.
    pub fn count_differences(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// True if at least one cell is set.
    pub fn has_differences(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    /// Coordinates of set cells, row-major.
    pub fn iter_set(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
