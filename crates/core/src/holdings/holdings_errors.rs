//! Error types for holdings aggregation.

use thiserror::Error;

/// Errors surfaced when closing an aggregation batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoldingsError {
    /// The whole batch produced nothing usable. This is the only failure
    /// an end user sees; everything upstream degrades to "fewer
    /// holdings" instead.
    #[error("No holdings could be recognized in the uploaded screenshots. Use a clear, full-resolution capture of the positions table and try again.")]
    NoHoldingsRecognized,
}
