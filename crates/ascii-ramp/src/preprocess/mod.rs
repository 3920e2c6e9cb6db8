//! Image preprocessing for character-ramp rendering.
//!
//! Everything that happens between a decoded image and the quantizer lives
//! here:
//!
//! 1. **Target dimensions** - output width is caller-chosen; height follows
//!    the source aspect ratio scaled by [`CELL_ASPECT`] (0.55) to compensate
//!    for tall monospace glyph cells.
//! 2. **Resize** - bilinear ([`RESIZE_FILTER`]), pinned for determinism.
//! 3. **Grayscale** - the `image` crate's Rec. 709 luminance transform.
//! 4. **Contrast enhancement** - mean-anchored spread
//!    ([`contrast::enhance`]); factor 1.0 is a strict no-op.
//!
//! The result is a [`GrayscaleCanvas`], consumed once by the character
//! mapping pass in [`output`](crate::output).

pub mod contrast;
mod options;
mod preprocessor;
pub mod resize;

pub use options::{RenderOptions, DEFAULT_CONTRAST, DEFAULT_MAX_DIMENSION, DEFAULT_WIDTH};
pub use preprocessor::{GrayscaleCanvas, Preprocessor};
pub use resize::{CELL_ASPECT, RESIZE_FILTER};
