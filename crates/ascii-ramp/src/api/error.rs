//! Error type for the rendering pipeline.

use thiserror::Error;

/// Everything that can go wrong between input bytes and finished art.
///
/// Parameter problems ([`ZeroWidth`](RenderError::ZeroWidth),
/// [`InvalidContrast`](RenderError::InvalidContrast)) are reported before
/// any decoding or I/O; [`TooLarge`](RenderError::TooLarge) fires after
/// decode but before resize work starts.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input bytes are not a decodable image.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// The requested output width was zero.
    #[error("output width must be at least 1")]
    ZeroWidth,

    /// The contrast factor was negative or NaN.
    #[error("contrast factor must be a non-negative number, got {0}")]
    InvalidContrast(f32),

    /// The decoded image exceeds the configured dimension limit.
    #[error("image is {width}x{height} px, exceeding the {max} px per-side limit")]
    TooLarge { width: u32, height: u32, max: u32 },

    /// Reading the input file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
