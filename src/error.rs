use ascii_ramp::RenderError;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::TemplateError;

/// Errors surfaced by the upload endpoint.
///
/// Responses carry the message as a plain text body. The two 400 messages
/// for malformed form posts are load-bearing: clients match on the exact
/// strings "No file part" and "No selected file".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file part")]
    MissingFilePart,

    #[error("No selected file")]
    EmptyFilename,

    #[error("Invalid upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Conversion failed: {0}")]
    Render(#[from] RenderError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Map a conversion failure to a status code.
///
/// Undecodable bytes are the client's fault (422), oversized images are
/// rejected like oversized bodies (413), bad parameters are 400, and
/// anything IO-shaped is ours (500).
fn render_status(e: &RenderError) -> StatusCode {
    match e {
        RenderError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RenderError::ZeroWidth | RenderError::InvalidContrast(_) => StatusCode::BAD_REQUEST,
        RenderError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        RenderError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingFilePart => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::EmptyFilename => (StatusCode::BAD_REQUEST, self.to_string()),
            // MultipartError already distinguishes malformed (400) from
            // over-limit (413) bodies
            ApiError::Multipart(e) => (e.status(), self.to_string()),
            ApiError::Render(e) => (render_status(e), self.to_string()),
            ApiError::Template(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Storage(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %message, "Request failed");
        }

        (status, message).into_response()
    }
}
