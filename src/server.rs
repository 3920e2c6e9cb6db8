//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::{ConvertService, TemplateService, UploadStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub templates: Arc<TemplateService>,
    pub converter: Arc<ConvertService>,
    pub store: Arc<UploadStore>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    create_app_state_with_config(config, asset_loader)
}

/// Create application state from an explicit config.
///
/// Integration tests use this to point storage at temporary directories.
pub fn create_app_state_with_config(
    config: AppConfig,
    asset_loader: Arc<AssetLoader>,
) -> anyhow::Result<AppState> {
    let store = UploadStore::new(&config.upload_dir, &config.converted_dir);
    store
        .ensure_dirs()
        .map_err(|e| anyhow::anyhow!("Failed to create storage directories: {e}"))?;

    let converter = Arc::new(ConvertService::new(
        config.conversion.width,
        config.conversion.contrast,
        config.limits.max_dimension,
    ));
    let templates = Arc::new(TemplateService::new(asset_loader));

    Ok(AppState {
        config: Arc::new(config),
        templates,
        converter,
        store: Arc::new(store),
    })
}

/// Build the router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.limits.max_upload_bytes;
    let converted_dir = state.config.converted_dir.clone();

    Router::new()
        // Upload form (GET) and conversion endpoint (POST)
        .route("/", get(handle_index).post(handle_upload))
        // Rendered text files, downloadable as-is
        .nest_service("/converted", ServeDir::new(converted_dir))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state, body cap and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_index(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<axum::response::Html<String>, ApiError> {
    api::handle_index(axum::extract::State(state.templates)).await
}

async fn handle_upload(
    axum::extract::State(state): axum::extract::State<AppState>,
    multipart: axum::extract::Multipart,
) -> Result<axum::response::Html<String>, ApiError> {
    api::handle_upload(
        axum::extract::State(state.store),
        axum::extract::State(state.converter),
        axum::extract::State(state.templates),
        multipart,
    )
    .await
}
