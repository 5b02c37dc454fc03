//! Format sniffing from leading bytes

use crate::{IoError, IoResult};
use imagediff_core::ImageFormat;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Leading bytes and the format they identify
const SIGNATURES: [(&[u8], ImageFormat); 3] = [
    (&PNG_SIGNATURE, ImageFormat::Png),
    (b"P5", ImageFormat::Pnm),
    (b"P6", ImageFormat::Pnm),
];

/// Detect the format of the file at `path` from its first bytes.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut header = Vec::with_capacity(PNG_SIGNATURE.len());
    File::open(path)?
        .take(PNG_SIGNATURE.len() as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the format of an in-memory image from its first bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(format!(
            "need at least 2 bytes to detect a format, got {}",
            data.len()
        )));
    }
    SIGNATURES
        .iter()
        .find(|(signature, _)| data.starts_with(signature))
        .map(|&(_, format)| format)
        .ok_or_else(|| IoError::UnsupportedFormat("unrecognized file signature".to_string()))
}
