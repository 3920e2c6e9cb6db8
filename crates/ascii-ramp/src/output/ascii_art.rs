//! The finished rendering: rows of ramp characters.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A completed ASCII rendering.
///
/// Rows are stored top to bottom; every row has exactly `width` characters,
/// all drawn from the [`CharacterRamp`](crate::CharacterRamp). The textual
/// form (via [`Display`](fmt::Display) / `to_string()`) joins rows with
/// `\n` and carries no trailing newline, so a rendering with zero rows is
/// the empty string.
///
/// # Example
///
/// ```
/// use ascii_ramp::AsciiRenderer;
/// use image::{DynamicImage, GrayImage, Luma};
///
/// let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([0u8])));
/// let art = AsciiRenderer::new().width(8).render_image(&img).unwrap();
///
/// assert_eq!(art.height(), art.rows().len());
/// assert!(art.rows().iter().all(|row| row.chars().all(|c| c == '@')));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<String>,
    width: usize,
}

impl AsciiArt {
    /// Wrap finished rows.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that every row has exactly `width` characters.
    pub(crate) fn new(rows: Vec<String>, width: usize) -> Self {
        debug_assert!(
            rows.iter().all(|row| row.chars().count() == width),
            "every row must have exactly {} characters",
            width
        );
        Self { rows, width }
    }

    /// The rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Width in characters.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the rendering has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the textual form to a file, replacing any existing content.
    ///
    /// Plain best-effort write: on failure a partial file may remain.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_string())
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_rows_with_newline() {
        let art = AsciiArt::new(vec!["@@".to_string(), "!!".to_string()], 2);
        assert_eq!(art.to_string(), "@@\n!!");
    }

    #[test]
    fn test_display_has_no_trailing_newline() {
        let art = AsciiArt::new(vec!["@#$".to_string()], 3);
        assert_eq!(art.to_string(), "@#$");
    }

    #[test]
    fn test_empty_art_renders_empty_string() {
        let art = AsciiArt::new(Vec::new(), 100);
        assert!(art.is_empty());
        assert_eq!(art.height(), 0);
        assert_eq!(art.to_string(), "");
    }

    #[test]
    fn test_accessors() {
        let art = AsciiArt::new(vec!["@@@@".to_string(); 3], 4);
        assert_eq!(art.width(), 4);
        assert_eq!(art.height(), 3);
        assert_eq!(art.rows().len(), 3);
    }

    #[test]
    fn test_write_to_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");

        let art = AsciiArt::new(vec!["@#".to_string(), ".!".to_string()], 2);
        art.write_to_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "@#\n.!");

        // Overwrites existing content.
        let shorter = AsciiArt::new(vec!["!".to_string()], 1);
        shorter.write_to_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "!");
    }
}
