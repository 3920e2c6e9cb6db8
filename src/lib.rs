//! Rampart - image to ASCII art over HTTP
//!
//! Upload an image, get it back rendered over a luminance character ramp.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
