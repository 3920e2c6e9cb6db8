use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::assets::AssetLoader;

/// Error type for template rendering
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Failed to read template: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the result section of the upload page needs for one conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionView {
    /// The rendered ASCII text, rows joined with newlines
    pub ascii_art: String,
    /// Where the plain-text version can be downloaded
    pub download_href: String,
    /// Stored file name, shown as the heading
    pub file_name: String,
    /// Grid width in characters
    pub width: usize,
    /// Grid height in rows
    pub height: usize,
}

/// Service for rendering HTML pages with Tera
pub struct TemplateService {
    assets: Arc<AssetLoader>,
}

impl TemplateService {
    /// Create a new template service
    pub fn new(assets: Arc<AssetLoader>) -> Self {
        let template_count = assets.list_templates().len();
        tracing::info!(templates = template_count, "Template service initialized");

        Self { assets }
    }

    /// Render the upload page, optionally with a finished conversion.
    ///
    /// `None` renders the bare form; `Some` adds the result section with
    /// the ASCII art in a `<pre>` block.
    pub fn render_index(&self, view: Option<&ConversionView>) -> Result<String, TemplateError> {
        self.render(
            Path::new("index.html"),
            &serde_json::json!({ "view": view }),
        )
    }

    /// Render a template with the given data
    /// Templates are always loaded fresh to support live editing via TEMPLATES_DIR
    pub fn render(
        &self,
        template_path: &Path,
        data: &serde_json::Value,
    ) -> Result<String, TemplateError> {
        let template_name = template_path.to_str().unwrap_or("unknown");

        let template_content = self
            .assets
            .read_template_string(template_path)
            .map_err(|_| TemplateError::NotFound(template_path.display().to_string()))?;

        let mut tera = Tera::default();
        tera.add_raw_template(template_name, &template_content)?;

        let context = Context::from_serialize(data)?;
        let html = tera.render(template_name, &context)?;

        Ok(html)
    }
}
