use crate::assets::AssetLoader;
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP server binds to (BIND_ADDR env var wins)
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Directory where uploaded images are stored
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Directory where rendered ASCII text files are stored
    #[serde(default = "default_converted_dir")]
    pub converted_dir: PathBuf,

    /// Rendering defaults applied to every upload
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Guards applied to incoming uploads
    #[serde(default)]
    pub limits: LimitsConfig,
}

fn default_listen() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploaded")
}

fn default_converted_dir() -> PathBuf {
    PathBuf::from("converted")
}

/// Rendering parameters for the ASCII conversion
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ConversionConfig {
    /// Output width in characters
    #[serde(default = "default_width")]
    pub width: u32,

    /// Contrast enhancement factor (1.0 leaves pixels untouched)
    #[serde(default = "default_contrast")]
    pub contrast: f32,
}

fn default_width() -> u32 {
    100
}

fn default_contrast() -> f32 {
    1.5
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            contrast: default_contrast(),
        }
    }
}

/// Limits enforced before an upload is decoded
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct LimitsConfig {
    /// Largest accepted request body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Largest accepted image side in pixels
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

fn default_max_dimension() -> u32 {
    8192
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_dimension: default_max_dimension(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        listen = %config.listen,
                        width = config.conversion.width,
                        contrast = config.conversion.contrast,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            upload_dir: default_upload_dir(),
            converted_dir: default_converted_dir(),
            conversion: ConversionConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}
