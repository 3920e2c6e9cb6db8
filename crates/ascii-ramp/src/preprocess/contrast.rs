//! Mean-anchored contrast enhancement.
//!
//! The enhancement spreads (or compresses) luminance around the per-image
//! mean: `new = mean + (old - mean) * factor`, computed in `f32`, rounded to
//! nearest and clamped to `[0, 255]`. A factor of exactly 1.0 skips the pass
//! so the buffer stays strictly untouched.

/// Apply contrast enhancement to a grayscale pixel buffer in place.
///
/// The mean is the plain arithmetic average of the buffer, so a uniform
/// image is a fixed point for every factor. Factor 0 collapses all pixels
/// to the (rounded) mean.
pub fn enhance(pixels: &mut [u8], factor: f32) {
    if pixels.is_empty() || (factor - 1.0).abs() < f32::EPSILON {
        return;
    }

    let sum: u64 = pixels.iter().map(|&p| u64::from(p)).sum();
    let mean = sum as f32 / pixels.len() as f32;

    for p in pixels.iter_mut() {
        let adjusted = mean + (f32::from(*p) - mean) * factor;
        *p = adjusted.clamp(0.0, 255.0).round() as u8;
    }
}
