use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A file written by the store, with its name relative to the owning directory
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// File name inside the upload or converted directory
    pub file_name: String,
    /// Full path on disk
    pub path: PathBuf,
}

/// Filesystem layout for uploads and their rendered ASCII text.
///
/// Uploads land in the upload directory as
/// `{UTC timestamp}_{random suffix}_{sanitized original name}`; the random
/// suffix keeps two uploads within the same second from clobbering each
/// other. Rendered text lands in the converted directory as
/// `{upload file name}_ascii.txt`, so the pairing stays visible in a
/// directory listing.
pub struct UploadStore {
    upload_dir: PathBuf,
    converted_dir: PathBuf,
}

impl UploadStore {
    pub fn new(upload_dir: impl Into<PathBuf>, converted_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            converted_dir: converted_dir.into(),
        }
    }

    /// Create both directories if they are missing
    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.upload_dir)?;
        fs::create_dir_all(&self.converted_dir)?;
        Ok(())
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn converted_dir(&self) -> &Path {
        &self.converted_dir
    }

    /// Persist an uploaded image under a collision-resistant name
    pub fn store_upload(&self, original_name: &str, data: &[u8]) -> io::Result<StoredFile> {
        let file_name = format!(
            "{}_{}_{}",
            timestamp(),
            random_suffix(),
            sanitize_filename(original_name)
        );
        let path = self.upload_dir.join(&file_name);
        fs::write(&path, data)?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Stored upload");
        Ok(StoredFile { file_name, path })
    }

    /// Persist rendered ASCII text next to its source upload
    pub fn store_ascii(&self, upload_file_name: &str, art: &str) -> io::Result<StoredFile> {
        let file_name = format!("{upload_file_name}_ascii.txt");
        let path = self.converted_dir.join(&file_name);
        fs::write(&path, art)?;

        tracing::debug!(path = %path.display(), bytes = art.len(), "Stored ASCII text");
        Ok(StoredFile { file_name, path })
    }
}

/// UTC wall-clock second, compact form (20260825143059)
fn timestamp() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// Short random tag so same-second uploads get distinct names
fn random_suffix() -> String {
    use rand::Rng;
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(6)
        .map(char::from)
        .collect()
}

/// Reduce a client-supplied filename to something safe to join to a path.
///
/// Keeps only the final path component, drops everything outside
/// `[A-Za-z0-9._-]`, and strips leading dots. Falls back to "upload" when
/// nothing survives.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
