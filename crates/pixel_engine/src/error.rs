//! Unified error types for pixel_engine

use thiserror::Error;

/// Main error type for pixel_engine operations
///
/// Hit-test misses, declined resolution changes and out-of-range fill
/// neighbours are not errors; they surface as `Option`/`bool` results.
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Surface Errors ===
    #[error("Rendering surface unavailable: {message}")]
    SurfaceUnavailable { message: String },

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    PixelBufferSize { expected: usize, actual: usize },

    // === Color Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidColor { value: String },

    // === Export Errors ===
    #[error("Format '{name}' does not support {operation}")]
    UnsupportedFormat { name: String, operation: String },

    #[error("Failed to encode image: {message}")]
    ImageEncodingFailed { message: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
