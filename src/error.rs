//! Error types for the ocean host.
//!
//! The wave model itself is total and never fails; everything that can go
//! wrong lives on the host side (files, presets, GPU setup).

use thiserror::Error;

/// Main error type for Raging Sea operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preset parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("GPU error: {0}")]
    Gpu(String),

    #[error("Window error: {0}")]
    Window(String),
}

/// Result type alias for Raging Sea operations
pub type Result<T> = std::result::Result<T, Error>;
