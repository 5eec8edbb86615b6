//! Holdings aggregation across screenshots.

mod aggregator;
mod holdings_errors;
mod holdings_model;


pub use aggregator::SnapshotAggregator;
pub use holdings_errors::HoldingsError;
pub use holdings_model::{Holding, HoldingsSnapshot};
