//! PixelGrid - The image container compared by the difference pipeline
//!
//! A `PixelGrid` is a rectangular array of 32-bit RGBA pixels.
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major in a flat buffer, one `u32` per pixel
//! - Each pixel is packed as `0xRRGGBBAA` (see [`crate::color`])
//!
//! # Ownership model
//!
//! `PixelGrid` uses `Arc` for cheap cloning (shared ownership), and is
//! never modified once built. To modify pixel data, convert to
//! `PixelGridMut` via [`PixelGrid::try_into_mut`] or [`PixelGrid::to_mut`],
//! then convert back with `Into<PixelGrid>`.

mod access;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// Binary PNM format (PGM / PPM)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }
}

/// Internal grid data
#[derive(Debug, Clone, PartialEq, Eq)]
struct GridData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed RGBA pixels, row-major
    data: Vec<u32>,
}

impl GridData {
    fn validate_dimensions(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }
}

/// Main image container
///
/// # Examples
///
/// ```
/// use imagediff_core::PixelGrid;
///
/// let grid = PixelGrid::new(640, 480).unwrap();
/// assert_eq!(grid.width(), 640);
/// assert_eq!(grid.height(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    inner: Arc<GridData>,
}

impl PixelGrid {
    /// Create a new grid with the specified dimensions.
    ///
    /// Every pixel is initialized to transparent black (`0x00000000`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a new grid with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        let len = GridData::validate_dimensions(width, height)?;
        Ok(Self::from_data(GridData {
            width,
            height,
            data: vec![pixel; len],
        }))
    }

    /// Create a grid from packed `0xRRGGBBAA` pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::BufferLength`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let len = GridData::validate_dimensions(width, height)?;
        if pixels.len() != len {
            return Err(Error::BufferLength {
                expected: len,
                actual: pixels.len(),
            });
        }
        Ok(Self::from_data(GridData {
            width,
            height,
            data: pixels,
        }))
    }

    /// Create a grid from interleaved 8-bit RGBA samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_interleaved(width, height, bytes, 4)
    }

    /// Create an opaque grid from interleaved 8-bit RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `bytes.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        Self::from_interleaved(width, height, bytes, 3)
    }

    fn from_interleaved(width: u32, height: u32, bytes: &[u8], samples: usize) -> Result<Self> {
        let len = GridData::validate_dimensions(width, height)?;
        let expected = len * samples;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(samples)
            .map(|px| match samples {
                4 => color::compose_rgba(px[0], px[1], px[2], px[3]),
                _ => color::compose_rgb(px[0], px[1], px[2]),
            })
            .collect();
        Ok(Self::from_data(GridData {
            width,
            height,
            data,
        }))
    }

    fn from_data(data: GridData) -> Self {
        PixelGrid {
            inner: Arc::new(data),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Check whether two grids have identical width and height.
    #[inline]
    pub fn same_size(&self, other: &PixelGrid) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Get raw access to the packed pixels, row-major.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this grid.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get exclusive mutable access without copying.
    ///
    /// Fails (returning `self`) when the data is shared.
    pub fn try_into_mut(self) -> std::result::Result<PixelGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixelGridMut { inner: data }),
            Err(arc) => Err(PixelGrid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    pub fn to_mut(&self) -> PixelGridMut {
        PixelGridMut {
            inner: GridData::clone(&self.inner),
        }
    }
}

/// Mutable image container
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`PixelGrid`] using `Into<PixelGrid>`.
#[derive(Debug)]
pub struct PixelGridMut {
    inner: GridData,
}

impl PixelGridMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the packed pixels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable raw access to the packed pixels.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }
}

impl From<PixelGridMut> for PixelGrid {
    fn from(grid_mut: PixelGridMut) -> Self {
        PixelGrid::from_data(grid_mut.inner)
    }
}
