pub mod config;

pub use config::{AppConfig, ConversionConfig, LimitsConfig};
