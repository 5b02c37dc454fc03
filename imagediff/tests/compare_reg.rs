//! Image comparison regression test
//!
//! Runs whole comparisons through [`ImageComparer`] for every labeler and
//! bounding box mode, plus rendering, file input and sharing across
//! threads.
//!
//! Run with:
//! ```
//! cargo test -p imagediff --test compare_reg
//! ```

use imagediff::color::{compose_rgb, compose_rgba};
use imagediff::{
    AnalyzerType, BoundingBox, BoundingBoxMode, Color, CompareError, CompareOptions,
    ImageComparer, ImageFormat, LabelerType, MAX_BOUNDING_BOX_PADDING, PixelGrid, ScanOrder,
};
use imagediff_test::{RegParams, grid_with_pixels};
use proptest::prelude::*;
use std::sync::Arc;
use std::thread;

const WHITE: u32 = 0xFFFF_FFFF;

fn options(labeler: LabelerType, detection: i32, mode: BoundingBoxMode, padding: i32) -> CompareOptions {
    CompareOptions::default()
        .with_labeler(labeler)
        .with_detection_padding(detection)
        .with_bounding_box_mode(mode)
        .with_bounding_box_padding(padding)
}

#[test]
fn compare_reg() {
    let mut rp = RegParams::new("compare");

    let base = PixelGrid::filled(4, 4, WHITE).expect("base");
    let one_pixel = grid_with_pixels(4, 4, WHITE, &[(1, 1, compose_rgb(0, 0, 0))]).expect("fixture");
    let corners = grid_with_pixels(
        4,
        4,
        WHITE,
        &[(0, 0, compose_rgb(0, 0, 0)), (3, 3, compose_rgb(0, 0, 0))],
    )
    .expect("fixture");

    // --- Identical images: no boxes, equal, for every combination ---
    for labeler in [LabelerType::Basic, LabelerType::ConnectedComponent] {
        for mode in [BoundingBoxMode::Single, BoundingBoxMode::Multiple] {
            let comparer = ImageComparer::new(options(labeler, 2, mode, 2)).expect("comparer");
            let boxes = comparer.compare(Some(&corners), Some(&corners)).expect("compare");
            rp.compare_values(0.0, boxes.len() as f64, 0.0);
            rp.compare_values(1.0, comparer.equals(Some(&corners), Some(&corners)) as u8 as f64, 0.0);
        }
    }

    // --- One pixel: padding 0 and 2 ---
    let tight = ImageComparer::new(options(LabelerType::Basic, 2, BoundingBoxMode::Single, 0))
        .expect("comparer");
    let boxes = tight.compare(Some(&base), Some(&one_pixel)).expect("compare");
    rp.compare_boxes(&[BoundingBox::new_unchecked(1, 1, 0, 0)], &boxes);

    let boxes = ImageComparer::new(CompareOptions::default())
        .expect("comparer")
        .compare(Some(&base), Some(&one_pixel))
        .expect("compare");
    rp.compare_boxes(&[BoundingBox::new_unchecked(-1, -1, 4, 4)], &boxes);

    // --- Two corners: split or merged depending on detection padding ---
    let split = ImageComparer::new(options(
        LabelerType::ConnectedComponent,
        0,
        BoundingBoxMode::Multiple,
        0,
    ))
    .expect("comparer");
    let boxes = split.compare(Some(&base), Some(&corners)).expect("compare");
    rp.compare_boxes(
        &[
            BoundingBox::new_unchecked(0, 0, 0, 0),
            BoundingBox::new_unchecked(3, 3, 0, 0),
        ],
        &boxes,
    );

    let merged = ImageComparer::new(options(
        LabelerType::ConnectedComponent,
        2,
        BoundingBoxMode::Multiple,
        0,
    ))
    .expect("comparer");
    let boxes = merged.compare(Some(&base), Some(&corners)).expect("compare");
    rp.compare_boxes(&[BoundingBox::new_unchecked(0, 0, 3, 3)], &boxes);

    // Column-major scanning finds the same regions.
    let column = ImageComparer::new(
        options(LabelerType::ConnectedComponent, 0, BoundingBoxMode::Multiple, 0)
            .with_scan_order(ScanOrder::ColumnMajor),
    )
    .expect("comparer");
    let boxes = column.compare(Some(&base), Some(&corners)).expect("compare");
    rp.compare_values(2.0, boxes.len() as f64, 0.0);

    // --- Perceptual analyzer tolerates small changes ---
    let nearly = grid_with_pixels(4, 4, WHITE, &[(2, 2, compose_rgb(254, 254, 254))]).expect("fixture");
    let perceptual = ImageComparer::new(CompareOptions::default().with_analyzer(AnalyzerType::Cie76))
        .expect("comparer");
    let exact = ImageComparer::new(CompareOptions::default()).expect("comparer");
    rp.compare_values(1.0, perceptual.equals(Some(&base), Some(&nearly)) as u8 as f64, 0.0);
    rp.compare_values(0.0, exact.equals(Some(&base), Some(&nearly)) as u8 as f64, 0.0);

    // --- Alpha-only change: exact sees it, CIE76 does not ---
    let faded = grid_with_pixels(4, 4, WHITE, &[(0, 3, compose_rgba(255, 255, 255, 0))]).expect("fixture");
    rp.compare_values(0.0, exact.equals(Some(&base), Some(&faded)) as u8 as f64, 0.0);
    rp.compare_values(1.0, perceptual.equals(Some(&base), Some(&faded)) as u8 as f64, 0.0);

    // --- Input errors ---
    let wide = PixelGrid::filled(5, 4, WHITE).expect("wide");
    let comparer = ImageComparer::new(CompareOptions::default()).expect("comparer");
    let mismatch = matches!(
        comparer.compare(Some(&base), Some(&wide)),
        Err(CompareError::SizeMismatch { .. })
    );
    rp.compare_values(1.0, mismatch as u8 as f64, 0.0);
    rp.compare_values(0.0, comparer.equals(Some(&base), Some(&wide)) as u8 as f64, 0.0);
    rp.compare_values(1.0, comparer.equals(None, None) as u8 as f64, 0.0);
    rp.compare_values(0.0, comparer.equals(Some(&base), None) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "compare regression test failed");
}

#[test]
fn compare_render_reg() {
    let mut rp = RegParams::new("compare_render");

    let base = PixelGrid::filled(6, 6, WHITE).expect("base");
    let changed = grid_with_pixels(6, 6, WHITE, &[(2, 2, compose_rgb(0, 0, 0))]).expect("fixture");
    let comparer = ImageComparer::new(
        CompareOptions::default()
            .with_bounding_box_padding(1)
            .with_bounding_box_color(Color::BLUE),
    )
    .expect("comparer");

    let rendered = comparer
        .compare_and_render(Some(&base), Some(&changed))
        .expect("render");
    let blue = Color::BLUE.to_pixel();

    // Box (1, 1, 2, 2): outline covers columns and rows 1..=3.
    for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3), (2, 1), (1, 2)] {
        let hit = rendered.get_pixel(x, y) == Some(blue);
        rp.compare_values(1.0, hit as u8 as f64, 0.0);
    }
    // The interior keeps the second image's pixel; outside is untouched.
    rp.compare_values(compose_rgb(0, 0, 0) as f64, rendered.get_pixel(2, 2).unwrap_or(0) as f64, 0.0);
    rp.compare_values(WHITE as f64, rendered.get_pixel(4, 4).unwrap_or(0) as f64, 0.0);
    // The input is not modified.
    rp.compare_values(compose_rgb(0, 0, 0) as f64, changed.get_pixel(2, 2).unwrap_or(0) as f64, 0.0);
    rp.compare_values(WHITE as f64, changed.get_pixel(1, 1).unwrap_or(0) as f64, 0.0);

    assert!(rp.cleanup(), "compare_render regression test failed");
}

#[test]
fn compare_padding_limits_reg() {
    let mut rp = RegParams::new("compare_padding_limits");

    let base = PixelGrid::filled(4, 4, WHITE).expect("base");
    let pair = grid_with_pixels(
        4,
        4,
        WHITE,
        &[(0, 0, compose_rgb(0, 0, 0)), (3, 3, compose_rgb(0, 0, 0))],
    )
    .expect("fixture");

    // --- Detection padding far beyond the image bridges everything ---
    let wide = ImageComparer::new(options(
        LabelerType::ConnectedComponent,
        i32::MAX,
        BoundingBoxMode::Multiple,
        0,
    ))
    .expect("comparer");
    let boxes = wide.compare(Some(&base), Some(&pair)).expect("compare");
    rp.compare_boxes(&[BoundingBox::new_unchecked(0, 0, 3, 3)], &boxes);

    // --- Largest accepted bounding box padding ---
    let padded = ImageComparer::new(options(
        LabelerType::Basic,
        0,
        BoundingBoxMode::Single,
        MAX_BOUNDING_BOX_PADDING,
    ))
    .expect("comparer");
    let boxes = padded.compare(Some(&base), Some(&pair)).expect("compare");
    let span = 3 + 2 * MAX_BOUNDING_BOX_PADDING;
    rp.compare_boxes(
        &[BoundingBox::new_unchecked(-MAX_BOUNDING_BOX_PADDING, -MAX_BOUNDING_BOX_PADDING, span, span)],
        &boxes,
    );
    // every edge lies outside the image, so rendering leaves it unchanged
    let rendered = padded.compare_and_render(Some(&base), Some(&pair)).expect("render");
    rp.compare_values(1.0, (rendered.data() == pair.data()) as u8 as f64, 0.0);

    // --- One past the limit is a configuration error ---
    for padding in [MAX_BOUNDING_BOX_PADDING + 1, 1_500_000_000] {
        let rejected = matches!(
            ImageComparer::new(CompareOptions::default().with_bounding_box_padding(padding)),
            Err(CompareError::InvalidConfiguration(_))
        );
        rp.compare_values(1.0, rejected as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "compare_padding_limits regression test failed");
}

#[test]
fn compare_files_reg() {
    let mut rp = RegParams::new("compare_files");

    let outdir = std::env::temp_dir().join("imagediff_regout");
    std::fs::create_dir_all(&outdir).expect("Failed to create output directory");

    let base = PixelGrid::filled(5, 5, WHITE).expect("base");
    let changed = grid_with_pixels(5, 5, WHITE, &[(4, 0, compose_rgb(10, 20, 30))]).expect("fixture");
    let first = outdir.join("compare_files_1.png");
    let second = outdir.join("compare_files_2.pnm");
    imagediff::io::write_image(&base, &first, ImageFormat::Png).expect("write png");
    imagediff::io::write_image(&changed, &second, ImageFormat::Pnm).expect("write pnm");

    let comparer = ImageComparer::new(CompareOptions::default().with_bounding_box_padding(0))
        .expect("comparer");
    let boxes = comparer.compare_files(&first, &second).expect("compare files");
    rp.compare_boxes(&[BoundingBox::new_unchecked(4, 0, 0, 0)], &boxes);

    let missing = comparer.compare_files(&first, outdir.join("compare_files_missing.png"));
    rp.compare_values(1.0, matches!(missing, Err(CompareError::Io(_))) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "compare_files regression test failed");
}

#[test]
fn compare_shared_across_threads() {
    let comparer = Arc::new(
        ImageComparer::new(options(
            LabelerType::ConnectedComponent,
            0,
            BoundingBoxMode::Multiple,
            0,
        ))
        .expect("comparer"),
    );
    let base = PixelGrid::filled(16, 16, WHITE).expect("base");

    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let comparer = Arc::clone(&comparer);
            let base = base.clone();
            thread::spawn(move || {
                let changed = grid_with_pixels(
                    16,
                    16,
                    WHITE,
                    &[(i, i, 0), (15 - i, 15, 0)],
                )
                .expect("fixture");
                comparer.compare(Some(&base), Some(&changed)).expect("compare")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let boxes = handle.join().expect("thread");
        let i = i as i32;
        assert_eq!(
            boxes,
            vec![
                BoundingBox::new_unchecked(i, i, 0, 0),
                BoundingBox::new_unchecked(15 - i, 15, 0, 0),
            ]
        );
    }
}

fn arb_pair() -> impl Strategy<Value = (PixelGrid, PixelGrid)> {
    (1u32..7, 1u32..7).prop_flat_map(|(w, h)| {
        let n = (w * h) as usize;
        (
            prop::collection::vec(prop::sample::select(vec![WHITE, 0x0000_00FF, 0x8080_80FF]), n),
            prop::collection::vec(prop::sample::select(vec![WHITE, 0x0000_00FF, 0x8080_80FF]), n),
        )
            .prop_map(move |(a, b)| {
                (
                    PixelGrid::from_pixels(w, h, a).unwrap(),
                    PixelGrid::from_pixels(w, h, b).unwrap(),
                )
            })
    })
}

proptest! {
    #[test]
    fn prop_self_comparison_is_empty((a, _b) in arb_pair(), cie in any::<bool>()) {
        let analyzer = if cie { AnalyzerType::Cie76 } else { AnalyzerType::ExactMatch };
        let comparer = ImageComparer::new(
            options(LabelerType::ConnectedComponent, 1, BoundingBoxMode::Multiple, 1)
                .with_analyzer(analyzer),
        ).unwrap();
        prop_assert!(comparer.compare(Some(&a), Some(&a)).unwrap().is_empty());
        prop_assert!(comparer.equals(Some(&a), Some(&a)));
    }

    #[test]
    fn prop_single_mode_at_most_one_box((a, b) in arb_pair(), detection in 0i32..3) {
        let comparer = ImageComparer::new(
            options(LabelerType::ConnectedComponent, detection, BoundingBoxMode::Single, 0),
        ).unwrap();
        let boxes = comparer.compare(Some(&a), Some(&b)).unwrap();
        prop_assert!(boxes.len() <= 1);
        prop_assert_eq!(boxes.is_empty(), comparer.equals(Some(&a), Some(&b)));
    }

    #[test]
    fn prop_multiple_boxes_cover_every_difference((a, b) in arb_pair(), detection in 0i32..3) {
        let comparer = ImageComparer::new(
            options(LabelerType::ConnectedComponent, detection, BoundingBoxMode::Multiple, 0),
        ).unwrap();
        let boxes = comparer.compare(Some(&a), Some(&b)).unwrap();
        let mask = comparer.difference_mask(Some(&a), Some(&b)).unwrap();
        for (x, y) in mask.iter_set() {
            prop_assert!(boxes.iter().any(|bx| bx.contains_point(x as i32, y as i32)));
        }
    }
}
