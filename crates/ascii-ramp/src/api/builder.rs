//! AsciiRenderer builder -- the primary ergonomic entry point for the crate.

use std::fs;
use std::path::Path;

use image::DynamicImage;

use crate::output::{render, AsciiArt};
use crate::preprocess::{Preprocessor, RenderOptions};
use crate::ramp::CharacterRamp;

use super::RenderError;

/// High-level image-to-ASCII renderer.
///
/// Wraps the complete pipeline (decode, resize, grayscale, contrast
/// enhancement, ramp quantization) behind a fluent builder with the
/// conventional defaults (width 100, contrast 1.5).
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - All `render_*` methods take `&self`, so one renderer is **reusable**
///   across any number of images
/// - Parameters are validated on render, before any decoding or I/O
/// - The character ramp is fixed; there is no setter for it
///
/// # Example
///
/// ```
/// use ascii_ramp::AsciiRenderer;
/// use image::{DynamicImage, GrayImage, Luma};
///
/// let renderer = AsciiRenderer::new().width(50).contrast(1.5);
///
/// let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(100, 50, Luma([70u8])));
/// let art = renderer.render_image(&img).unwrap();
///
/// assert_eq!(art.width(), 50);
/// assert_eq!(art.height(), 13); // floor(50 * 0.5 * 0.55)
/// ```
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    ramp: CharacterRamp,
    options: RenderOptions,
}

impl AsciiRenderer {
    /// Create a renderer with default options.
    ///
    /// Defaults: width 100 characters, contrast factor 1.5, maximum input
    /// dimension 8192 px per side.
    pub fn new() -> Self {
        Self {
            ramp: CharacterRamp::standard(),
            options: RenderOptions::default(),
        }
    }

    /// Set the output width in characters.
    #[inline]
    pub fn width(mut self, width: u32) -> Self {
        self.options = self.options.width(width);
        self
    }

    /// Set the contrast enhancement factor (1.0 = unchanged).
    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.options = self.options.contrast(factor);
        self
    }

    /// Set the maximum accepted decoded image dimension (px per side).
    #[inline]
    pub fn max_dimension(mut self, pixels: u32) -> Self {
        self.options = self.options.max_dimension(pixels);
        self
    }

    /// The active options.
    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render encoded image bytes (PNG, JPEG, GIF, BMP, ...).
    ///
    /// The format is sniffed from the byte content, not from any filename.
    ///
    /// # Example
    ///
    /// ```
    /// use ascii_ramp::AsciiRenderer;
    /// use image::{DynamicImage, GrayImage, ImageFormat, Luma};
    /// use std::io::Cursor;
    ///
    /// let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(16, 16, Luma([255u8])));
    /// let mut png = Cursor::new(Vec::new());
    /// img.write_to(&mut png, ImageFormat::Png).unwrap();
    ///
    /// let art = AsciiRenderer::new().width(16).render_bytes(png.get_ref()).unwrap();
    /// assert!(art.rows().iter().all(|row| row.chars().all(|c| c == '!')));
    /// ```
    pub fn render_bytes(&self, bytes: &[u8]) -> Result<AsciiArt, RenderError> {
        self.options.validate()?;
        let image = image::load_from_memory(bytes)?;
        self.render_decoded(&image)
    }

    /// Render an image file from disk.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ascii_ramp::AsciiRenderer;
    ///
    /// let art = AsciiRenderer::new().render_path("photo.png")?;
    /// println!("{art}");
    /// # Ok::<(), ascii_ramp::RenderError>(())
    /// ```
    pub fn render_path(&self, path: impl AsRef<Path>) -> Result<AsciiArt, RenderError> {
        self.options.validate()?;
        let bytes = fs::read(path)?;
        let image = image::load_from_memory(&bytes)?;
        self.render_decoded(&image)
    }

    /// Render an already-decoded image.
    pub fn render_image(&self, image: &DynamicImage) -> Result<AsciiArt, RenderError> {
        self.options.validate()?;
        self.render_decoded(image)
    }

    fn render_decoded(&self, image: &DynamicImage) -> Result<AsciiArt, RenderError> {
        let (width, height) = (image.width(), image.height());
        let max = self.options.max_dimension;
        if width > max || height > max {
            return Err(RenderError::TooLarge { width, height, max });
        }

        let canvas = Preprocessor::new(self.options).process(image);
        Ok(render::render_canvas(&canvas, &self.ramp))
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
