//! Core error types for the Snapfolio application.
//!
//! Engine-specific errors are defined in the `snapfolio-ocr` crate and
//! wrapped here; module-level errors live next to their modules.

use thiserror::Error;

use crate::holdings::HoldingsError;
use snapfolio_ocr::OcrError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the screenshot import application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("OCR operation failed: {0}")]
    Ocr(#[from] OcrError),

    #[error("{0}")]
    Holdings(#[from] HoldingsError),

    #[error("I/O operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
