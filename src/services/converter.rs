use ascii_ramp::{AsciiArt, AsciiRenderer, RenderError};
use axum::body::Bytes;
use std::sync::Arc;

/// High-level conversion service wrapping the ASCII renderer
pub struct ConvertService {
    renderer: Arc<AsciiRenderer>,
}

impl ConvertService {
    pub fn new(width: u32, contrast: f32, max_dimension: u32) -> Self {
        Self {
            renderer: Arc::new(
                AsciiRenderer::new()
                    .width(width)
                    .contrast(contrast)
                    .max_dimension(max_dimension),
            ),
        }
    }

    /// Render uploaded image bytes to ASCII art
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// CPU-intensive decode, resize and quantize work.
    pub async fn render(&self, data: Bytes) -> Result<AsciiArt, RenderError> {
        let renderer = self.renderer.clone();

        tokio::task::spawn_blocking(move || renderer.render_bytes(&data))
            .await
            .map_err(|e| {
                RenderError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Conversion task failed: {e}"),
                ))
            })?
    }
}
