//! Screenshot table reconstruction.
//!
//! OCR output is a flat token list with pixel coordinates and no notion
//! of rows or columns. This module rebuilds the positions table the
//! brokerage app rendered: locate the header keywords, cluster the
//! tokens beneath them into visual rows, pair rows into holdings, assign
//! tokens to columns by horizontal distance, then extract the name and
//! number fields.

mod field_extract;
mod screenshot_constants;
mod table_layout;
mod table_model;
mod table_parser;

#[cfg(test)]
mod table_parser_tests;

pub use screenshot_constants::*;
pub use table_model::{tokens_from_raw, Token};
pub use table_parser::{TableConfig, TableParser};
