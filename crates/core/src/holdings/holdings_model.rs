//! Holdings snapshot models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One reconstructed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Display name as it appeared in the screenshot. Across a batch the
    /// first sighting's spelling wins.
    pub name: String,
    /// Ticker or code. Screenshot parsing cannot separate it from the
    /// name, so it mirrors `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Number of shares or units. Zero when the screenshot showed none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    /// Average cost per unit, when the cost column yielded a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<Decimal>,
    /// Current market value. Required; row groups without it never become
    /// holdings.
    pub market_value: Decimal,
}

/// Snapshot assembled from one import batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsSnapshot {
    /// Valuation date the snapshot stands for.
    pub as_of: NaiveDate,
    /// Holdings sorted by market value, largest first.
    pub holdings: Vec<Holding>,
    /// Sum of all holdings' market values.
    pub total_market_value: Decimal,
    /// Number of screenshot files the batch contained.
    pub files_processed: usize,
    /// Correlates the log lines of one import run.
    pub import_run_id: String,
}
