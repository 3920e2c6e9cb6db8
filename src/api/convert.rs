use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Html,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::{ConversionView, ConvertService, TemplateService, UploadStore};

/// Serve the upload form
pub async fn handle_index(
    State(templates): State<Arc<TemplateService>>,
) -> Result<Html<String>, ApiError> {
    let html = templates.render_index(None)?;
    Ok(Html(html))
}

/// Accept a multipart upload and respond with the rendered ASCII art.
///
/// The form must carry a file field named "image". A matching field without
/// a filename parameter is a plain form value, not a file, and is skipped;
/// an empty filename means the browser submitted with no file selected.
pub async fn handle_upload(
    State(store): State<Arc<UploadStore>>,
    State(converter): State<Arc<ConvertService>>,
    State(templates): State<Arc<TemplateService>>,
    mut multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        // file_name must be captured before bytes() consumes the field
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };

        if file_name.is_empty() {
            return Err(ApiError::EmptyFilename);
        }

        let data = field.bytes().await?;
        upload = Some((file_name, data));
        break;
    }

    let Some((original_name, data)) = upload else {
        return Err(ApiError::MissingFilePart);
    };

    tracing::info!(file = %original_name, bytes = data.len(), "Upload received");

    // The raw upload is kept even if conversion fails, so a bad image can
    // be inspected afterwards
    let stored = store.store_upload(&original_name, &data)?;

    let art = converter.render(data).await?;
    let text = art.to_string();
    let ascii_file = store.store_ascii(&stored.file_name, &text)?;

    tracing::info!(
        upload = %stored.file_name,
        rows = art.height(),
        columns = art.width(),
        "Conversion finished"
    );

    let view = ConversionView {
        ascii_art: text,
        download_href: format!("/converted/{}", ascii_file.file_name),
        file_name: stored.file_name,
        width: art.width(),
        height: art.height(),
    };

    let html = templates.render_index(Some(&view))?;
    Ok(Html(html))
}
