//! # Error Types
//!
//! This module defines error types used throughout the moldura library.

use thiserror::Error;

/// Main error type for moldura operations
#[derive(Debug, Error)]
pub enum FrameError {
    /// Image bytes could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// Finished bitmap could not be encoded
    #[error("Encode error: {0}")]
    Encode(image::ImageError),

    /// Invalid frame configuration (style, color, thickness)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Render pipeline misuse (e.g. exporting before a render)
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, FrameError>;
