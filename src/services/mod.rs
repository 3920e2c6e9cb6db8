pub mod converter;
pub mod storage;
pub mod template_service;

pub use converter::ConvertService;
pub use storage::{StoredFile, UploadStore};
pub use template_service::{ConversionView, TemplateError, TemplateService};
