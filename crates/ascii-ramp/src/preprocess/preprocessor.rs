//! Decoded-image-to-canvas preprocessing.
//!
//! The [`Preprocessor`] turns an arbitrary decoded raster into a
//! [`GrayscaleCanvas`]: resize to the character grid dimensions, collapse to
//! single-channel luminance, then apply mean-anchored contrast enhancement.
//! Quantization to ramp characters happens afterwards in
//! [`output`](crate::output).

use image::DynamicImage;

use super::{contrast, resize, RenderOptions};

/// Resized single-channel intensity grid, one `u8` per character cell.
///
/// Row-major, `width * height` pixels. Produced by [`Preprocessor::process`]
/// and consumed exactly once by the character mapping pass; it is never
/// persisted. A canvas may legitimately have zero rows (extremely wide
/// sources floor to height 0).
#[derive(Debug, Clone)]
pub struct GrayscaleCanvas {
    /// Luminance values after contrast enhancement, row-major order.
    pub pixels: Vec<u8>,

    /// Grid width in character cells.
    pub width: u32,

    /// Grid height in character cells.
    pub height: u32,
}

impl GrayscaleCanvas {
    /// Iterate over rows as `width`-sized slices.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Whether the canvas has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }
}

/// Turns a decoded image into a [`GrayscaleCanvas`].
///
/// # Pipeline
///
/// 1. **Target dimensions**: output width from the options; height from the
///    source aspect ratio and the 0.55 cell correction
///    ([`resize::target_dimensions`]). Height 0 short-circuits to an empty
///    canvas without touching the pixel data.
/// 2. **Resize** with the pinned bilinear filter
///    ([`resize::RESIZE_FILTER`]).
/// 3. **Grayscale** via the `image` crate's `to_luma8` (Rec. 709 weights,
///    alpha discarded).
/// 4. **Contrast enhancement** around the canvas mean
///    ([`contrast::enhance`]); skipped entirely for factor 1.0.
///
/// The preprocessor assumes its options were validated by the caller; the
/// renderer in [`api`](crate::api) does so before decoding anything.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    options: RenderOptions,
}

impl Preprocessor {
    /// Create a preprocessor for the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Run the resize/grayscale/contrast pipeline on a decoded image.
    pub fn process(&self, image: &DynamicImage) -> GrayscaleCanvas {
        let (width, height) =
            resize::target_dimensions(image.width(), image.height(), self.options.width);

        if height == 0 {
            return GrayscaleCanvas {
                pixels: Vec::new(),
                width,
                height,
            };
        }

        let resized = image.resize_exact(width, height, resize::RESIZE_FILTER);
        let mut pixels = resized.to_luma8().into_raw();
        contrast::enhance(&mut pixels, self.options.contrast);

        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "canvas buffer must match {}x{} grid",
            width,
            height
        );

        GrayscaleCanvas {
            pixels,
            width,
            height,
        }
    }
}
