//! Color channel helpers for packed 32-bit RGBA pixels.
//!
//! # Pixel format
//!
//! Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).

/// Bit offset of each channel within a packed pixel
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

#[inline]
fn channel(pixel: u32, shift: u32) -> u8 {
    (pixel >> shift) as u8
}

/// Red channel of a packed pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    channel(pixel, RED_SHIFT)
}

/// Green channel of a packed pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    channel(pixel, GREEN_SHIFT)
}

/// Blue channel of a packed pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    channel(pixel, BLUE_SHIFT)
}

/// Alpha channel of a packed pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    channel(pixel, ALPHA_SHIFT)
}

/// Pack an opaque pixel.
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_rgba(r, g, b, u8::MAX)
}

/// Pack a pixel with explicit alpha.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}

/// Unpack the color channels, dropping alpha.
#[inline]
pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
    let [r, g, b, _] = pixel.to_be_bytes();
    (r, g, b)
}

/// Unpack all four channels.
#[inline]
pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
    let [r, g, b, a] = pixel.to_be_bytes();
    (r, g, b, a)
}

/// Opaque RGB color used for drawing overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Pack this color as an opaque 32-bit pixel.
    #[inline]
    pub fn to_pixel(self) -> u32 {
        compose_rgb(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_and_extract() {
        let pixel = compose_rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(pixel, 0x1234_5678);
        assert_eq!(extract_rgba(pixel), (0x12, 0x34, 0x56, 0x78));
        assert_eq!(extract_rgb(pixel), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_compose_rgb_is_opaque() {
        assert_eq!(alpha(compose_rgb(1, 2, 3)), 255);
        assert_eq!(red(0xab00_0000), 0xab);
        assert_eq!(blue(0x0000_cd00), 0xcd);
    }

    #[test]
    fn test_color_to_pixel() {
        assert_eq!(Color::RED.to_pixel(), 0xff00_00ff);
        assert_eq!(Color::default(), Color::RED);
    }
}
