//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (P5) and PPM (P6) with a maxval of 255, and writes
//! P6. Header fields may be separated by any whitespace and interleaved
//! with `#` comments. Alpha is dropped on write and set opaque on read.

use crate::{IoError, IoResult};
use imagediff_core::{PixelGrid, color};
use std::io::{BufRead, Read, Write};

/// Read one byte, or `None` at end of stream.
fn next_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let byte = match reader.fill_buf()?.first() {
        Some(&b) => b,
        None => return Ok(None),
    };
    reader.consume(1);
    Ok(Some(byte))
}

/// Read the next whitespace-delimited header token, skipping comments.
///
/// Consumes exactly one whitespace byte after the token, which for the
/// final header field is the separator before the raster.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    loop {
        let byte = next_byte(reader)?;
        match byte {
            Some(b'#') if token.is_empty() => {
                while let Some(b) = next_byte(reader)? {
                    if b == b'\n' || b == b'\r' {
                        break;
                    }
                }
            }
            Some(b) if b.is_ascii_whitespace() => {
                if !token.is_empty() {
                    return Ok(token);
                }
            }
            Some(b) => token.push(b as char),
            None if !token.is_empty() => return Ok(token),
            None => {
                return Err(IoError::InvalidData(
                    "unexpected end of PNM header".to_string(),
                ));
            }
        }
    }
}

fn read_number<R: BufRead>(reader: &mut R, field: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {}: {:?}", field, token)))
}

/// Read a binary PNM image (P5/P6) from a reader.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<PixelGrid> {
    let magic = read_token(&mut reader)?;
    let samples = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM type: {}",
                other
            )));
        }
    };

    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval != 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} (only 255 is supported)",
            maxval
        )));
    }

    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "PNM dimensions must be nonzero: {}x{}",
            width, height
        )));
    }
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(samples))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM dimensions too large: {}x{}", width, height))
        })?;

    // Grow with the data actually present instead of trusting the header.
    let mut raster = Vec::new();
    reader
        .take(expected as u64)
        .read_to_end(&mut raster)?;
    if raster.len() != expected {
        return Err(IoError::InvalidData(format!(
            "truncated PNM raster: expected {} bytes, got {}",
            expected,
            raster.len()
        )));
    }

    let grid = if samples == 1 {
        let pixels = raster
            .iter()
            .map(|&g| color::compose_rgb(g, g, g))
            .collect();
        PixelGrid::from_pixels(width, height, pixels)?
    } else {
        PixelGrid::from_rgb_bytes(width, height, &raster)?
    };
    Ok(grid)
}

/// Write a grid as binary PPM (P6).
pub fn write_pnm<W: Write>(grid: &PixelGrid, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", grid.width(), grid.height())?;

    let mut data = Vec::with_capacity(grid.data().len() * 3);
    for &pixel in grid.data() {
        let (r, g, b) = color::extract_rgb(pixel);
        data.extend_from_slice(&[r, g, b]);
    }
    writer.write_all(&data)?;
    writer.flush()?;
    Ok(())
}
