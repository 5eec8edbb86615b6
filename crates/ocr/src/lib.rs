//! Snapfolio OCR Crate
//!
//! This crate is the engine-agnostic OCR boundary for the Snapfolio
//! screenshot import pipeline.
//!
//! # Overview
//!
//! Recognition itself happens outside this workspace, in an external
//! engine (a PaddleOCR serving endpoint in production). This crate
//! defines the contract the rest of the application programs against:
//!
//! - [`RawToken`] - one recognized text fragment with its bounding quad
//! - [`OcrEngine`] - async trait every engine implementation fulfills
//! - [`ImagePreprocessor`] - hook for image preparation ahead of
//!   recognition
//! - [`RemoteOcrEngine`] - HTTP client for a PaddleOCR-style serving
//!   endpoint
//!
//! # Error Semantics
//!
//! [`OcrError`] distinguishes an unreachable engine (fatal for a whole
//! import batch) from a recognition failure on a single image
//! (recoverable; the caller moves on to the next file).

pub mod engine;
pub mod errors;
pub mod preprocess;
pub mod remote;

// Re-export the boundary types
pub use engine::{OcrEngine, RawToken};
pub use errors::OcrError;
pub use preprocess::{ImagePreprocessor, PassthroughPreprocessor};
pub use remote::{RemoteOcrConfig, RemoteOcrEngine};
