//! Labeling and bounding box regression test
//!
//! Runs masks through every labeler / identifier combination and checks
//! the resulting boxes.

use imagediff_core::BoundingBox;
use imagediff_region::{BoundingBoxMode, LabelerType, create_identifier, create_labeler};
use imagediff_test::{RegParams, mask_from_rows};

fn boxes_for(
    rows: &[&str],
    labeler: LabelerType,
    detection_padding: i32,
    mode: BoundingBoxMode,
    bounding_box_padding: i32,
) -> Vec<BoundingBox> {
    let mask = mask_from_rows(rows).expect("fixture");
    let labeler = create_labeler(labeler, detection_padding).expect("labeler");
    let identifier = create_identifier(mode, bounding_box_padding).expect("identifier");
    identifier.create_bounding_boxes(&labeler.label(&mask))
}

#[test]
fn bounds_reg() {
    let mut rp = RegParams::new("bounds");
    let two_corners = ["#...", "....", "....", "...#"];

    // --- Single pixel, with and without padding ---
    let single = [".....", ".#...", ".....", "....."];
    let boxes = boxes_for(&single, LabelerType::Basic, 2, BoundingBoxMode::Single, 0);
    rp.compare_boxes(&[BoundingBox::new_unchecked(1, 1, 0, 0)], &boxes);
    let boxes = boxes_for(&single, LabelerType::Basic, 2, BoundingBoxMode::Single, 2);
    rp.compare_boxes(&[BoundingBox::new_unchecked(-1, -1, 4, 4)], &boxes);

    // --- Basic labeling is one region whatever the mode ---
    let boxes = boxes_for(&two_corners, LabelerType::Basic, 0, BoundingBoxMode::Multiple, 0);
    rp.compare_boxes(&[BoundingBox::new_unchecked(0, 0, 3, 3)], &boxes);

    // --- Connected components, multiple boxes ---
    let boxes = boxes_for(
        &two_corners,
        LabelerType::ConnectedComponent,
        0,
        BoundingBoxMode::Multiple,
        0,
    );
    rp.compare_boxes(
        &[
            BoundingBox::new_unchecked(0, 0, 0, 0),
            BoundingBox::new_unchecked(3, 3, 0, 0),
        ],
        &boxes,
    );

    // Detection padding 2 reaches the diagonal neighbor at distance 3.
    let boxes = boxes_for(
        &two_corners,
        LabelerType::ConnectedComponent,
        2,
        BoundingBoxMode::Multiple,
        0,
    );
    rp.compare_boxes(&[BoundingBox::new_unchecked(0, 0, 3, 3)], &boxes);

    // --- Connected components, single box ---
    let boxes = boxes_for(
        &two_corners,
        LabelerType::ConnectedComponent,
        0,
        BoundingBoxMode::Single,
        1,
    );
    rp.compare_boxes(&[BoundingBox::new_unchecked(-1, -1, 5, 5)], &boxes);

    // --- Box order follows the label order ---
    let rows = ["...#", "....", "#...", "...."];
    let boxes = boxes_for(&rows, LabelerType::ConnectedComponent, 0, BoundingBoxMode::Multiple, 0);
    rp.compare_boxes(
        &[
            BoundingBox::new_unchecked(3, 0, 0, 0),
            BoundingBox::new_unchecked(0, 2, 0, 0),
        ],
        &boxes,
    );

    // --- No differences, no boxes ---
    let blank = ["....", "...."];
    for mode in [BoundingBoxMode::Single, BoundingBoxMode::Multiple] {
        let boxes = boxes_for(&blank, LabelerType::ConnectedComponent, 1, mode, 3);
        rp.compare_values(0.0, boxes.len() as f64, 0.0);
    }

    assert!(rp.cleanup(), "bounds regression test failed");
}
