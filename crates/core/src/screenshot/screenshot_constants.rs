//! Keyword tables and layout defaults for brokerage screenshot parsing.
//!
//! The keywords target the Chinese-language positions views of
//! Futu/Tiger-style brokerage apps. Matching is by substring, so a
//! combined header like `持仓/可用` anchors the volume column just as a
//! plain `持仓` does.

/// Header keywords anchoring the market value column
pub const VALUE_KEYWORDS: &[&str] = &["市值"];

/// Header keywords anchoring the profit/loss column
pub const PROFIT_KEYWORDS: &[&str] = &["盈亏"];

/// Header keywords anchoring the volume (position size) column
pub const VOLUME_KEYWORDS: &[&str] = &["持仓", "可用"];

/// Header keywords anchoring the cost/current-price column
pub const COST_KEYWORDS: &[&str] = &["成本", "现价"];

/// Row label separating the account summary from the holdings list;
/// data rows start after the row containing it
pub const DATA_START_MARKER: &str = "持仓股";

/// Currency markers stripped when testing whether a fragment is numeric
/// noise; the misspelled variants are common OCR misreads of `HK$`
pub const CURRENCY_MARKERS: &[&str] = &["HK$", "HKS$", "HHK$"];

/// Fullwidth yen/yuan sign, stripped alongside [`CURRENCY_MARKERS`]
pub const YUAN_SIGN: char = '¥';

/// Default vertical slack between successive tokens of one visual row
pub const DEFAULT_ROW_TOLERANCE: f64 = 25.0;

/// Default vertical margin below the header line before data tokens start
pub const DEFAULT_HEADER_MARGIN: f64 = 20.0;

/// Default horizontal margin past the leftmost column anchor within which
/// name fragments are still accepted
pub const DEFAULT_NAME_MARGIN: f64 = 180.0;

/// Default number of visual rows each holding occupies
pub const DEFAULT_ROWS_PER_HOLDING: usize = 2;
