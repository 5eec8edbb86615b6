//! Reconstruction of holdings from positioned OCR tokens.
//!
//! The parser reads a screenshot the way a person does: find the header
//! line, read each holding as a pair of rows (name and volume above,
//! prices and value below), and take the number sitting nearest each
//! column anchor.

use std::num::NonZeroUsize;

use log::{debug, info, warn};
use rust_decimal::Decimal;
use snapfolio_ocr::RawToken;

use crate::holdings::Holding;

use super::field_extract::{extract_name, extract_number, NumberPreference};
use super::screenshot_constants::{
    DATA_START_MARKER, DEFAULT_HEADER_MARGIN, DEFAULT_NAME_MARGIN, DEFAULT_ROWS_PER_HOLDING,
    DEFAULT_ROW_TOLERANCE,
};
use super::table_layout::{cluster_rows, collect_column_texts, locate_anchors, select_data_rows};
use super::table_model::{tokens_from_raw, ColumnAnchors, ColumnKind, Row, Token};

/// Tuning knobs for table reconstruction. The defaults match the layouts
/// of the Chinese-language brokerage apps the keyword tables target.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Vertical margin below the header line; tokens above it are chrome.
    pub header_margin: f64,
    /// Maximum vertical distance between successive tokens of one row.
    pub row_tolerance: f64,
    /// How far right of the leftmost anchor a name fragment may sit.
    pub name_margin: f64,
    /// Visual rows per holding: two for the standard layout (name row
    /// above, price row below), one for compact single-line lists.
    pub rows_per_holding: NonZeroUsize,
    /// Upper bound on anchor distance when assigning tokens to columns.
    /// `None` forces every token into its nearest column.
    pub max_anchor_distance: Option<f64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            header_margin: DEFAULT_HEADER_MARGIN,
            row_tolerance: DEFAULT_ROW_TOLERANCE,
            name_margin: DEFAULT_NAME_MARGIN,
            rows_per_holding: NonZeroUsize::new(DEFAULT_ROWS_PER_HOLDING)
                .unwrap_or(NonZeroUsize::MIN),
            max_anchor_distance: None,
        }
    }
}

/// Rebuilds the holdings visible in one screenshot from its token list.
///
/// Stateless across images; one parser serves a whole import batch.
#[derive(Debug, Clone, Default)]
pub struct TableParser {
    config: TableConfig,
}

impl TableParser {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Convert engine output and parse it. `source` labels log lines.
    pub fn parse_raw(&self, source: &str, raw: &[RawToken]) -> Vec<Holding> {
        let tokens = tokens_from_raw(raw);
        self.parse(source, &tokens)
    }

    /// Reconstruct the holdings visible in one screenshot.
    ///
    /// Anything that prevents reading a table at all (no tokens, no
    /// recognizable header, no data rows) yields an empty list rather
    /// than an error; within a batch such an image simply contributes
    /// nothing.
    pub fn parse(&self, source: &str, tokens: &[Token]) -> Vec<Holding> {
        if tokens.is_empty() {
            debug!("No OCR tokens in {}", source);
            return Vec::new();
        }

        let anchors = match locate_anchors(tokens) {
            Some(anchors) => anchors,
            None => {
                warn!("Unable to locate a holdings table header in {}", source);
                return Vec::new();
            }
        };

        let rows = cluster_rows(
            tokens,
            anchors.header_y,
            self.config.header_margin,
            self.config.row_tolerance,
        );
        let data_rows = select_data_rows(rows, DATA_START_MARKER);
        if data_rows.is_empty() {
            debug!("No data rows below the header in {}", source);
            return Vec::new();
        }

        let mut holdings = Vec::new();
        let empty = Row::default();
        for group in data_rows.chunks(self.config.rows_per_holding.get()) {
            let upper = &group[0];
            let lower = group.get(1).unwrap_or(&empty);
            if let Some(holding) = self.assemble_holding(upper, lower, &anchors) {
                holdings.push(holding);
            }
        }

        info!(
            "Parsed {} holdings from {}: {:?}",
            holdings.len(),
            source,
            holdings.iter().map(|h| h.name.as_str()).collect::<Vec<_>>()
        );

        holdings
    }

    fn assemble_holding(&self, upper: &Row, lower: &Row, anchors: &ColumnAnchors) -> Option<Holding> {
        let max_distance = self.config.max_anchor_distance;

        // Market value sits in the lower row; a missing lower row means a
        // single-row layout where the upper row carries everything.
        let value_row = if lower.is_empty() { upper } else { lower };
        let value_texts = collect_column_texts(value_row, ColumnKind::Value, anchors, max_distance);

        // Volume and cost fall back column-wise: the lower row is only
        // consulted when the upper row put nothing near the anchor.
        let mut volume_texts = collect_column_texts(upper, ColumnKind::Volume, anchors, max_distance);
        if volume_texts.is_empty() {
            volume_texts = collect_column_texts(lower, ColumnKind::Volume, anchors, max_distance);
        }
        let mut cost_texts = collect_column_texts(upper, ColumnKind::Cost, anchors, max_distance);
        if cost_texts.is_empty() {
            cost_texts = collect_column_texts(lower, ColumnKind::Cost, anchors, max_distance);
        }

        let market_value = extract_number(&value_texts, NumberPreference::First);
        // The volume column usually shows the share count; some layouts
        // tuck it into the cost column instead.
        let quantity = extract_number(&volume_texts, NumberPreference::First)
            .or_else(|| extract_number(&cost_texts, NumberPreference::First));
        // Cost and current price can share one cell; cost is the later
        // figure.
        let cost_price = extract_number(&cost_texts, NumberPreference::Last);

        let name = extract_name(&upper.tokens, anchors.name_boundary, self.config.name_margin);

        let (name, market_value) = match (name, market_value) {
            (Some(name), Some(market_value)) => (name, market_value),
            _ => {
                debug!("Skipping row group: name or market value missing");
                return None;
            }
        };

        Some(Holding {
            symbol: Some(name.clone()),
            name,
            quantity: Some(quantity.unwrap_or(Decimal::ZERO)),
            cost_price,
            market_value,
        })
    }
}
