//! Cross-screenshot holdings merge.

use std::collections::HashMap;

use log::{debug, info};

use super::holdings_errors::HoldingsError;
use super::holdings_model::Holding;

/// Merges per-screenshot holdings into one deduplicated set.
///
/// Screenshots of a scrolling list overlap, and a holding clipped at a
/// screen edge parses with a truncated market value. Keyed by trimmed
/// name, the aggregator keeps whichever sighting reports the larger
/// market value; on a tie the earlier sighting stands, so feeding the
/// same screenshot twice changes nothing.
#[derive(Debug, Default)]
pub struct SnapshotAggregator {
    holdings: Vec<Holding>,
    index: HashMap<String, usize>,
}

impl SnapshotAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Record one sighting of a holding.
    pub fn insert(&mut self, holding: Holding) {
        let key = holding.name.trim().to_string();
        match self.index.get(&key) {
            Some(&slot) => {
                let existing = &mut self.holdings[slot];
                if holding.market_value > existing.market_value {
                    debug!(
                        "Replacing {} with larger sighting: {} -> {}",
                        key, existing.market_value, holding.market_value
                    );
                    existing.market_value = holding.market_value;
                    existing.quantity = holding.quantity;
                    existing.cost_price = holding.cost_price;
                    existing.symbol = holding.symbol;
                } else {
                    debug!(
                        "Keeping existing sighting of {}: {} >= {}",
                        key, existing.market_value, holding.market_value
                    );
                }
            }
            None => {
                self.index.insert(key, self.holdings.len());
                self.holdings.push(holding);
            }
        }
    }

    /// Record every holding parsed from one screenshot.
    pub fn extend(&mut self, holdings: impl IntoIterator<Item = Holding>) {
        for holding in holdings {
            self.insert(holding);
        }
    }

    /// Close the batch: an error when nothing was recognized, otherwise
    /// the deduplicated holdings sorted by market value, largest first.
    /// The sort is stable, so ties keep their insertion order and the
    /// output is identical across runs.
    pub fn finish(self) -> Result<Vec<Holding>, HoldingsError> {
        if self.holdings.is_empty() {
            return Err(HoldingsError::NoHoldingsRecognized);
        }

        let mut holdings = self.holdings;
        holdings.sort_by(|a, b| b.market_value.cmp(&a.market_value));
        info!("Aggregated {} holdings across the batch", holdings.len());
        Ok(holdings)
    }
}
