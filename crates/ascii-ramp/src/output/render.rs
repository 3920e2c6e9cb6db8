//! Canvas-to-characters mapping pass.

use crate::preprocess::GrayscaleCanvas;
use crate::ramp::CharacterRamp;

use super::AsciiArt;

/// Map every canvas cell through the ramp, row-major.
///
/// All ramp characters are single-byte ASCII, so each row string is built
/// with its exact capacity up front.
pub(crate) fn render_canvas(canvas: &GrayscaleCanvas, ramp: &CharacterRamp) -> AsciiArt {
    let width = canvas.width as usize;
    let mut rows = Vec::with_capacity(canvas.height as usize);

    for row in canvas.rows() {
        let mut line = String::with_capacity(width);
        for &luma in row {
            line.push(ramp.char_for(luma));
        }
        rows.push(line);
    }

    AsciiArt::new(rows, width)
}
