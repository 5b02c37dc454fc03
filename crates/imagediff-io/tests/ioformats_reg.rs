//! Image format regression test
//!
//! Writes a synthetic image in every supported format, reads it back
//! through format detection and checks the pixels survive.
//!
//! Run with:
//! ```
//! cargo test -p imagediff-io --test ioformats_reg
//! ```

use imagediff_core::color;
use imagediff_io::{ImageFormat, IoError, detect_format, read_image, read_image_mem, write_image};
use imagediff_test::{RegParams, grid_with_pixels};
use std::fs;

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");

    let outdir = std::env::temp_dir().join("imagediff_regout");
    fs::create_dir_all(&outdir).expect("Failed to create output directory");

    let grid = grid_with_pixels(
        16,
        9,
        color::compose_rgb(240, 240, 240),
        &[
            (0, 0, color::compose_rgb(255, 0, 0)),
            (15, 8, color::compose_rgb(0, 0, 255)),
            (7, 4, color::compose_rgb(12, 200, 99)),
        ],
    )
    .expect("fixture");

    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        let path = outdir.join(format!("ioformats.{}", format.extension()));
        write_image(&grid, &path, format).expect("write");

        let detected = detect_format(&path).expect("detect");
        rp.compare_values(1.0, if detected == format { 1.0 } else { 0.0 }, 0.0);

        let back = read_image(&path).expect("read");
        let ok = back.data() == grid.data();
        eprintln!(
            "  {:?} roundtrip: {} ({}x{})",
            format,
            if ok { "OK" } else { "FAILED" },
            back.width(),
            back.height()
        );
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    // PNG keeps alpha; PPM drops it and reads back opaque.
    let translucent = grid_with_pixels(2, 1, color::compose_rgba(1, 2, 3, 40), &[])
        .expect("fixture");
    let png_path = outdir.join("ioformats_alpha.png");
    write_image(&translucent, &png_path, ImageFormat::Png).expect("write png");
    let back = read_image(&png_path).expect("read png");
    rp.compare_values(40.0, back.get_rgba(1, 0).map_or(0.0, |p| p.3 as f64), 0.0);

    let pnm_path = outdir.join("ioformats_alpha.pnm");
    write_image(&translucent, &pnm_path, ImageFormat::Pnm).expect("write pnm");
    let back = read_image(&pnm_path).expect("read pnm");
    rp.compare_values(255.0, back.get_rgba(1, 0).map_or(0.0, |p| p.3 as f64), 0.0);

    // Malformed PNM headers fail without allocating the claimed raster.
    let headers: [&[u8]; 3] = [
        b"P6 4294967295 4294967295 255\n\0\0\0",
        b"P6 100000 100000 255\n\0\0\0",
        b"P5 0 0 255\n",
    ];
    for data in headers {
        let rejected = matches!(read_image_mem(data), Err(IoError::InvalidData(_)));
        rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);
    }

    assert!(rp.cleanup(), "ioformats regression test failed");
}
