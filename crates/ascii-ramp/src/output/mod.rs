//! Output types for the rendering pipeline.
//!
//! [`AsciiArt`] is the canonical result of every render: rows of ramp
//! characters with dimension metadata, a `Display` impl that joins rows
//! with `\n`, and a best-effort [`AsciiArt::write_to_file`] helper.

mod ascii_art;
pub(crate) mod render;

pub use ascii_art::AsciiArt;
