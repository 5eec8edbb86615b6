//! Error types for the OCR boundary.

use thiserror::Error;

/// Errors surfaced by OCR engines and preprocessors.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine process or endpoint could not be reached at all.
    /// Callers treat this as fatal for the whole import batch.
    #[error("OCR engine unavailable: {message}")]
    EngineUnavailable { message: String },

    /// The engine ran but produced no usable result for this image.
    /// Recoverable per file.
    #[error("Recognition failed: {message}")]
    RecognitionFailed { message: String },

    /// The payload is not an image an engine can work on.
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Reading or staging the image failed.
    #[error("Image I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
