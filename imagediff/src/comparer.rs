//! Image comparison pipeline
//!
//! [`ImageComparer`] chains the three stages built from a
//! [`CompareOptions`]:
//!
//! 1. an analyzer turns two grids into a [`DifferenceMask`]
//! 2. a labeler turns the mask into a [`LabelMap`](imagediff_core::LabelMap)
//! 3. an identifier turns the labels into [`BoundingBox`]es
//!
//! All stages are stateless between calls, so one comparer can serve
//! many threads.

use crate::error::{CompareError, CompareResult};
use crate::options::CompareOptions;
use imagediff_color::{DifferenceAnalyzer, create_analyzer};
use imagediff_core::{BoundingBox, DifferenceMask, PixelGrid};
use imagediff_region::{
    BoundingBoxIdentifier, DifferenceLabeler, create_identifier, create_labeler_with_order,
};
use log::debug;
use std::fmt;
use std::path::Path;

/// Finds and boxes the regions where two images differ.
pub struct ImageComparer {
    options: CompareOptions,
    analyzer: Box<dyn DifferenceAnalyzer>,
    labeler: Box<dyn DifferenceLabeler>,
    identifier: Box<dyn BoundingBoxIdentifier>,
}

impl fmt::Debug for ImageComparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageComparer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ImageComparer {
    /// Build a comparer from `options`.
    ///
    /// `ImageComparer::new(CompareOptions::default())` gives exact
    /// matching, flat labeling and one box padded by
    /// [`DEFAULT_BOUNDING_BOX_PADDING`](crate::DEFAULT_BOUNDING_BOX_PADDING).
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidConfiguration`] if the options fail
    /// [`CompareOptions::validate`].
    pub fn new(options: CompareOptions) -> CompareResult<Self> {
        options.validate()?;
        let analyzer = create_analyzer(options.analyzer, options.just_noticeable_difference)?;
        let labeler =
            create_labeler_with_order(options.labeler, options.detection_padding, options.scan_order)?;
        let identifier =
            create_identifier(options.bounding_box_mode, options.bounding_box_padding)?;

        debug!(
            "image comparer: analyzer={} (jnd {}), labeler={} (padding {}, {}), boxes={} (padding {})",
            options.analyzer,
            options.just_noticeable_difference,
            options.labeler,
            options.detection_padding,
            options.scan_order,
            options.bounding_box_mode,
            options.bounding_box_padding
        );

        Ok(Self {
            options,
            analyzer,
            labeler,
            identifier,
        })
    }

    /// The options this comparer was built from.
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Check both inputs are present and equally sized.
    fn check_inputs<'a>(
        first: Option<&'a PixelGrid>,
        second: Option<&'a PixelGrid>,
    ) -> CompareResult<(&'a PixelGrid, &'a PixelGrid)> {
        let first = first.ok_or(CompareError::NullInput("first image"))?;
        let second = second.ok_or(CompareError::NullInput("second image"))?;
        if !first.same_size(second) {
            return Err(CompareError::SizeMismatch {
                first: first.dimensions(),
                second: second.dimensions(),
            });
        }
        Ok((first, second))
    }

    /// Compute the per-pixel difference mask.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::NullInput`] if an image is missing and
    /// [`CompareError::SizeMismatch`] if their dimensions differ.
    pub fn difference_mask(
        &self,
        first: Option<&PixelGrid>,
        second: Option<&PixelGrid>,
    ) -> CompareResult<DifferenceMask> {
        let (first, second) = Self::check_inputs(first, second)?;
        Ok(self.analyzer.analyze(first, second))
    }

    /// Find the bounding boxes of the regions where the images differ.
    ///
    /// Boxes are padded and may extend past the image edges. An empty
    /// result means no pixel differs.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::NullInput`] if an image is missing and
    /// [`CompareError::SizeMismatch`] if their dimensions differ.
    pub fn compare(
        &self,
        first: Option<&PixelGrid>,
        second: Option<&PixelGrid>,
    ) -> CompareResult<Vec<BoundingBox>> {
        let mask = self.difference_mask(first, second)?;
        let labels = self.labeler.label(&mask);
        let boxes = self.identifier.create_bounding_boxes(&labels);
        debug!(
            "compare {}x{}: {} differing pixels, {} boxes",
            mask.width(),
            mask.height(),
            mask.count_differences(),
            boxes.len()
        );
        Ok(boxes)
    }

    /// Whether the two images are equal under the configured analyzer.
    ///
    /// Two missing images are equal; a single missing image or a size
    /// mismatch is not.
    pub fn equals(&self, first: Option<&PixelGrid>, second: Option<&PixelGrid>) -> bool {
        match (first, second) {
            (None, None) => true,
            (Some(a), Some(b)) if a.same_size(b) => !self.analyzer.analyze(a, b).has_differences(),
            _ => false,
        }
    }

    /// Compare the images and draw the resulting boxes onto a copy of the
    /// second one in the configured color.
    ///
    /// # Errors
    ///
    /// Fails like [`compare`](Self::compare).
    pub fn compare_and_render(
        &self,
        first: Option<&PixelGrid>,
        second: Option<&PixelGrid>,
    ) -> CompareResult<PixelGrid> {
        let boxes = self.compare(first, second)?;
        let second = second.ok_or(CompareError::NullInput("second image"))?;
        let mut canvas = second.to_mut();
        canvas.draw_boxes(&boxes, self.options.bounding_box_color);
        Ok(canvas.into())
    }

    /// Read two image files and compare them.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::Io`] if a file cannot be read, otherwise
    /// fails like [`compare`](Self::compare).
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        first: P,
        second: Q,
    ) -> CompareResult<Vec<BoundingBox>> {
        let first = imagediff_io::read_image(first)?;
        let second = imagediff_io::read_image(second)?;
        self.compare(Some(&first), Some(&second))
    }
}
