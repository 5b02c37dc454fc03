//! PNG image format support
//!
//! Every PNG flavor is normalized to 8-bit samples on read (palettes are
//! expanded, 16-bit samples stripped) and stored as packed RGBA. Writing
//! always produces 8-bit RGBA.

use crate::{IoError, IoResult};
use imagediff_core::{PixelGrid, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelGrid> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let width = reader.info().width;
    let height = reader.info().height;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for row in data.chunks(bytes_per_row).take(height as usize) {
        for px in row[..width as usize * samples].chunks_exact(samples) {
            let pixel = match *px {
                [g] => color::compose_rgb(g, g, g),
                [g, a] => color::compose_rgba(g, g, g, a),
                [r, g, b] => color::compose_rgb(r, g, b),
                [r, g, b, a] => color::compose_rgba(r, g, b, a),
                _ => unreachable!(),
            };
            pixels.push(pixel);
        }
    }

    Ok(PixelGrid::from_pixels(width, height, pixels)?)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(grid: &PixelGrid, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(grid.data().len() * 4);
    for &pixel in grid.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
