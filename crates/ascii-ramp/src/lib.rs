//! ascii-ramp: luminance-to-character-ramp ASCII art rendering
//!
//! This library turns a raster image into a grid of printable characters by
//! mapping pixel luminance onto a fixed, ordered character ramp. The whole
//! pipeline is a single deterministic transform: identical input bytes and
//! parameters always produce byte-identical output.
//!
//! # Quick Start
//!
//! The [`AsciiRenderer`] builder is the primary entry point:
//!
//! ```
//! use ascii_ramp::AsciiRenderer;
//! use image::{DynamicImage, GrayImage, Luma};
//!
//! let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(10, 10, Luma([128u8])));
//!
//! let renderer = AsciiRenderer::new().width(10).contrast(1.0);
//! let art = renderer.render_image(&img).unwrap();
//!
//! // 10 * (10/10) * 0.55 = 5.5, floored to 5 rows of 10 characters
//! assert_eq!(art.width(), 10);
//! assert_eq!(art.height(), 5);
//! ```
//!
//! For encoded bytes (PNG, JPEG, GIF, ...) use [`AsciiRenderer::render_bytes`];
//! for a file on disk use [`AsciiRenderer::render_path`]. The builder is
//! reusable: all `render_*` methods take `&self`.
//!
//! # Pipeline Overview
//!
//! ```text
//! encoded bytes / path
//!     |
//!     v
//! DynamicImage             (decode, any supported color mode)
//!     |
//!     v
//! target dimensions        (output width W, height = floor(W * H/origW * 0.55);
//!     |                     0.55 corrects for tall monospace character cells)
//!     v
//! resize                   (bilinear, pinned -- see Determinism below)
//!     |
//!     v
//! GrayscaleCanvas          (Rec. 709 luma, then mean-anchored contrast
//!     |                     enhancement, u8 per cell)
//!     v
//! CharacterRamp lookup     (index = v * (len-1) / 255, darkest '@' .. lightest '!')
//!     |
//!     v
//! AsciiArt                 (rows of characters, Display joins with '\n')
//! ```
//!
//! # Determinism
//!
//! Two operations in the pipeline depend on choices the underlying image
//! library leaves open, so this crate pins both and treats them as part of
//! its contract:
//!
//! - **Resampling filter**: bilinear ([`image::imageops::FilterType::Triangle`]),
//!   exposed as [`preprocess::RESIZE_FILTER`].
//! - **Luminance weighting**: the `image` crate's `to_luma8` transform,
//!   which uses Rec. 709 coefficients (0.2126 R + 0.7152 G + 0.0722 B).
//!
//! Changing either alters output byte-for-byte.
//!
//! # Limits
//!
//! Decoded images wider or taller than the configured maximum dimension
//! (default 8192 px) are rejected with [`RenderError::TooLarge`] before any
//! resize work happens. Callers feeding untrusted uploads should also bound
//! the encoded input size before handing bytes to this crate.

pub mod api;
pub mod output;
pub mod preprocess;
pub mod ramp;


pub use api::{AsciiRenderer, RenderError};
pub use output::AsciiArt;
pub use preprocess::{GrayscaleCanvas, Preprocessor, RenderOptions};
pub use ramp::CharacterRamp;
