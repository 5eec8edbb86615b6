//! Batch import of brokerage screenshots.
//!
//! One batch is the set of files a user uploaded together, usually
//! overlapping captures of the same scrolling positions list. Each file
//! is staged to the spool directory, recognized, parsed, and merged; the
//! batch produces a single holdings snapshot.

mod import_model;
mod import_service;
mod spool;


pub use import_model::ScreenshotFile;
pub use import_service::ScreenshotImportService;
