//! Snapfolio Core - screenshot table reconstruction and holdings
//! aggregation.
//!
//! Brokerage apps rarely offer an export, but everyone can take a
//! screenshot. An external OCR engine (see the `snapfolio-ocr` crate)
//! turns each screenshot into positioned text tokens; this crate rebuilds
//! the positions table from the raw token geometry and merges the
//! per-image results into one deduplicated holdings snapshot.
//!
//! # Pipeline
//!
//! ```text
//! screenshots --> OcrEngine --> Vec<RawToken>        (per image)
//!                                    |
//!                                    v
//!                              TableParser           (header anchors,
//!                                    |                row clustering,
//!                                    v                field extraction)
//!                              Vec<Holding>          (per image)
//!                                    |
//!                                    v
//!                            SnapshotAggregator      (keep-max merge
//!                                    |                across images)
//!                                    v
//!                            HoldingsSnapshot
//! ```
//!
//! The entry point is [`import::ScreenshotImportService`].

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod import;
pub mod screenshot;

// Re-export common types from the holdings and import modules
pub use holdings::{Holding, HoldingsSnapshot, SnapshotAggregator};
pub use import::{ScreenshotFile, ScreenshotImportService};
pub use screenshot::{TableConfig, TableParser, Token};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
