//! Output grid geometry and the pinned resampling filter.

use image::imageops::FilterType;

/// Vertical correction for monospace character cells.
///
/// Terminal glyph cells are roughly twice as tall as they are wide, so the
/// character grid needs about half as many rows as a square-pixel resize
/// would produce. 0.55 is a heuristic, not derived from any font's metrics;
/// it is kept exactly as-is because every produced rendering depends on it.
pub const CELL_ASPECT: f64 = 0.55;

/// The resampling filter used for the downscale, pinned to bilinear.
///
/// The filter affects pixel values (and therefore output characters) at
/// every edge in the source image, so it is part of the crate's determinism
/// contract rather than a tunable.
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Compute the character grid dimensions for a source image.
///
/// `height = floor(output_width * (source_height / source_width) * 0.55)`.
/// The height may legitimately come out as 0 for extremely wide sources
/// (e.g. a 100x1 image at width 100); callers must treat that as an empty
/// rendering, not an error.
pub fn target_dimensions(source_width: u32, source_height: u32, output_width: u32) -> (u32, u32) {
    debug_assert!(source_width > 0, "decoded images always have width > 0");
    let aspect = f64::from(source_height) / f64::from(source_width);
    let output_height = (f64::from(output_width) * aspect * CELL_ASPECT) as u32;
    (output_width, output_height)
}
