//! imagediff-io - Image I/O for imagediff
//!
//! Reads PNG and binary PNM files into [`PixelGrid`]s and writes them
//! back out:
//!
//! - PNG (feature `png-format`): any color type, normalized to 8-bit RGBA
//! - PNM (feature `pnm`): binary PGM / PPM in, PPM out
//!
//! The format of a file being read is detected from its magic bytes;
//! the extension is ignored.

pub mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use imagediff_core::ImageFormat;

use imagediff_core::PixelGrid;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;

/// Read an image from a file, detecting the format from its contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let file = File::open(path)?;
    read_image_format(BufReader::new(file))
}

/// Read an image from in-memory bytes.
pub fn read_image_mem(data: &[u8]) -> IoResult<PixelGrid> {
    read_image_format(Cursor::new(data))
}

/// Read an image from a seekable reader, detecting the format.
pub fn read_image_format<R: BufRead + Seek>(mut reader: R) -> IoResult<PixelGrid> {
    let format = detect_format_from_bytes(reader.fill_buf()?)?;
    read_image_as(reader, format)
}

/// Read an image of a known format.
pub fn read_image_as<R: BufRead + Seek>(reader: R, format: ImageFormat) -> IoResult<PixelGrid> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => {
            let _ = reader;
            Err(IoError::UnsupportedFormat(format!(
                "cannot read format {:?}",
                other
            )))
        }
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    grid: &PixelGrid,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(grid, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into a byte vector.
pub fn write_image_mem(grid: &PixelGrid, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(grid, &mut buffer, format)?;
    Ok(buffer)
}

/// Write an image to a writer in the given format.
pub fn write_image_format<W: Write>(
    grid: &PixelGrid,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(grid, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(grid, writer),
        #[allow(unreachable_patterns)]
        other => {
            let _ = (grid, writer);
            Err(IoError::UnsupportedFormat(format!(
                "cannot write format {:?}",
                other
            )))
        }
    }
}
