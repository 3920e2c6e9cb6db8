//! Rendering options and their validation.

use crate::api::RenderError;

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 100;

/// Default contrast enhancement factor.
pub const DEFAULT_CONTRAST: f32 = 1.5;

/// Default maximum decoded image dimension (pixels per side).
pub const DEFAULT_MAX_DIMENSION: u32 = 8192;

/// Configuration for one rendering pass.
///
/// # Defaults
///
/// - Width: 100 characters
/// - Contrast: 1.5 (moderate boost; 1.0 leaves luminance untouched)
/// - Maximum input dimension: 8192 px per side
///
/// # Example
///
/// ```
/// use ascii_ramp::RenderOptions;
///
/// let options = RenderOptions::new().width(80).contrast(1.0);
/// assert_eq!(options.width, 80);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Output width in characters. Must be at least 1.
    pub width: u32,

    /// Contrast enhancement factor applied to the grayscale canvas.
    ///
    /// - 1.0 = no change (the enhancement pass is skipped entirely)
    /// - values > 1.0 spread luminance away from the image mean
    /// - values in [0, 1) compress towards the mean
    pub contrast: f32,

    /// Reject decoded images wider or taller than this many pixels.
    pub max_dimension: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            contrast: DEFAULT_CONTRAST,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl RenderOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output width in characters.
    #[inline]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the contrast enhancement factor.
    #[inline]
    pub fn contrast(mut self, factor: f32) -> Self {
        self.contrast = factor;
        self
    }

    /// Set the maximum accepted decoded image dimension.
    #[inline]
    pub fn max_dimension(mut self, pixels: u32) -> Self {
        self.max_dimension = pixels;
        self
    }

    /// Check parameter ranges before any decoding or I/O happens.
    ///
    /// A zero width has no meaningful output; a negative (or NaN) contrast
    /// factor would invert or poison the enhancement formula.
    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::ZeroWidth);
        }
        if self.contrast < 0.0 || self.contrast.is_nan() {
            return Err(RenderError::InvalidContrast(self.contrast));
        }
        Ok(())
    }
}
