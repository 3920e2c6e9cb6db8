//! Public API for the ascii-ramp crate.
//!
//! This module provides the high-level API: the [`AsciiRenderer`] builder
//! and the [`RenderError`] error type.

mod builder;
mod error;

pub use builder::AsciiRenderer;
pub use error::RenderError;
