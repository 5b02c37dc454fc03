//! Color space conversion
//!
//! Converts 8-bit sRGB to CIE L*a*b* through CIE XYZ (D65 white point) and
//! measures CIE76 color distance:
//!
//! - RGB -> XYZ: sRGB decoding followed by the sRGB-to-XYZ matrix, scaled
//!   to 0..100
//! - XYZ -> LAB: normalization by the reference white and the CIE cube-root
//!   transform
//! - [`delta_e_76`]: Euclidean distance in L*a*b*

use imagediff_core::color;

/// Reference white X (D65, 2 degree observer)
pub const REF_X: f64 = 95.047;
/// Reference white Y
pub const REF_Y: f64 = 100.0;
/// Reference white Z
pub const REF_Z: f64 = 108.883;

/// CIE XYZ color representation (D65 illuminant, 0..100 scale)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// CIE L*a*b* color representation
///
/// - `l`: Lightness in range [0.0, 100.0]
/// - `a`: Green-Red component
/// - `b`: Blue-Yellow component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new LAB color
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE76 distance to `other`
    #[inline]
    pub fn distance(&self, other: &Lab) -> f64 {
        delta_e_76(*self, *other)
    }
}

/// Decode one gamma-encoded sRGB channel to linear light in [0, 1].
#[inline]
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// CIE L*a*b* companding function.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Convert RGB to CIE XYZ (D65 illuminant, sRGB color space)
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> Xyz {
    let r = srgb_to_linear(r);
    let g = srgb_to_linear(g);
    let b = srgb_to_linear(b);

    Xyz {
        x: (r * 0.4124 + g * 0.3576 + b * 0.1805) * 100.0,
        y: (r * 0.2126 + g * 0.7152 + b * 0.0722) * 100.0,
        z: (r * 0.0193 + g * 0.1192 + b * 0.9505) * 100.0,
    }
}

/// Convert CIE XYZ to CIE L*a*b*
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / REF_X);
    let fy = lab_f(xyz.y / REF_Y);
    let fz = lab_f(xyz.z / REF_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert RGB to CIE L*a*b*
#[inline]
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    xyz_to_lab(rgb_to_xyz(r, g, b))
}

/// Convert a packed `0xRRGGBBAA` pixel to CIE L*a*b*. Alpha is ignored.
#[inline]
pub fn pixel_to_lab(pixel: u32) -> Lab {
    let (r, g, b) = color::extract_rgb(pixel);
    rgb_to_lab(r, g, b)
}

/// CIE76 color difference: Euclidean distance in L*a*b*
pub fn delta_e_76(first: Lab, second: Lab) -> f64 {
    let dl = second.l - first.l;
    let da = second.a - first.a;
    let db = second.b - first.b;
    (dl * dl + da * da + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lab(lab: Lab, l: f64, a: f64, b: f64) {
        assert!(
            (lab.l - l).abs() < 1e-3 && (lab.a - a).abs() < 1e-3 && (lab.b - b).abs() < 1e-3,
            "expected ({l}, {a}, {b}), got {lab:?}"
        );
    }

    #[test]
    fn test_black() {
        assert_eq!(rgb_to_xyz(0, 0, 0), Xyz::new(0.0, 0.0, 0.0));
        assert_lab(rgb_to_lab(0, 0, 0), 0.0, 0.0, 0.0);
    }

    #[test]
    fn test_white() {
        let xyz = rgb_to_xyz(255, 255, 255);
        assert!((xyz.x - 95.05).abs() < 1e-9);
        assert!((xyz.y - 100.0).abs() < 1e-9);
        assert!((xyz.z - 108.9).abs() < 1e-9);
        assert_lab(rgb_to_lab(255, 255, 255), 100.0, 0.00526, -0.01041);
    }

    #[test]
    fn test_primaries() {
        assert_lab(rgb_to_lab(255, 0, 0), 53.23288, 80.10931, 67.22007);
        assert_lab(rgb_to_lab(0, 255, 0), 87.73703, -86.18464, 83.18116);
        assert_lab(rgb_to_lab(0, 0, 255), 32.30259, 79.19666, -107.86368);
    }

    #[test]
    fn test_linear_segment() {
        // (1, 1, 1) stays below both the sRGB and the L*a*b* knees
        assert_lab(rgb_to_lab(1, 1, 1), 0.27417, 0.0, 0.0);
    }

    #[test]
    fn test_pixel_to_lab_ignores_alpha() {
        let opaque = color::compose_rgba(12, 34, 56, 255);
        let clear = color::compose_rgba(12, 34, 56, 0);
        assert_eq!(pixel_to_lab(opaque), pixel_to_lab(clear));
    }

    #[test]
    fn test_delta_e() {
        let gray = rgb_to_lab(128, 128, 128);
        assert_eq!(delta_e_76(gray, gray), 0.0);
        let d = gray.distance(&rgb_to_lab(129, 128, 128));
        assert!((d - 0.40569).abs() < 1e-4);
        let full = delta_e_76(rgb_to_lab(0, 0, 0), rgb_to_lab(255, 255, 255));
        assert!((full - 100.0).abs() < 1e-3);
    }
}
