//! Field extraction from clustered rows: holding names and numbers.
//!
//! OCR output is noisy in predictable ways: a digit group split across
//! fragments, a currency marker misread, a company name chopped in two.
//! The extractors here work fragment by fragment and settle for the
//! first (or last) number a column yields.

use std::cmp::Ordering;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use super::screenshot_constants::{CURRENCY_MARKERS, YUAN_SIGN};
use super::table_model::Token;

lazy_static! {
    /// Signed decimal number without exponent. Table cells never use
    /// scientific notation.
    static ref NUMBER_REGEX: Regex = Regex::new(r"-?\d+(?:\.\d+)?")
        .expect("Invalid regex pattern");
}

/// Which end of a column's fragment list a number is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPreference {
    /// First fragment that yields a number, first number within it.
    First,
    /// Last fragment that yields a number, last number within it.
    Last,
}

/// Pull one number out of a column's text fragments.
///
/// Fragments are scanned in the order given by `prefer`, with thousands
/// separators stripped before matching. A fragment whose candidate fails
/// to parse is skipped rather than aborting the scan.
pub fn extract_number(texts: &[String], prefer: NumberPreference) -> Option<Decimal> {
    let ordered: Vec<&String> = match prefer {
        NumberPreference::First => texts.iter().collect(),
        NumberPreference::Last => texts.iter().rev().collect(),
    };

    for text in ordered {
        let cleaned = text.replace(',', "");
        let matches: Vec<&str> = NUMBER_REGEX
            .find_iter(&cleaned)
            .map(|m| m.as_str())
            .collect();
        let candidate = match prefer {
            NumberPreference::First => matches.first(),
            NumberPreference::Last => matches.last(),
        };
        if let Some(raw) = candidate {
            if let Ok(value) = Decimal::from_str(raw) {
                return Some(value);
            }
        }
    }

    None
}

/// Join the non-numeric fragments of an upper row into a holding name.
///
/// Fragments are taken left to right until the first digit-bearing token;
/// single-character fragments and fragments far to the right of the
/// leftmost header anchor are layout noise and get dropped. Returns
/// `None` when nothing name-like survives.
pub fn extract_name(tokens: &[Token], name_boundary: f64, name_margin: f64) -> Option<String> {
    let mut ordered: Vec<&Token> = tokens.iter().collect();
    ordered.sort_by(|a, b| a.cx.partial_cmp(&b.cx).unwrap_or(Ordering::Equal));

    let mut parts: Vec<&str> = Vec::new();
    for token in ordered {
        if contains_digit(&token.text) {
            break;
        }
        if token.text.chars().count() <= 1 {
            continue;
        }
        if token.cx > name_boundary + name_margin {
            continue;
        }
        parts.push(token.text.as_str());
    }

    normalize_name(&parts)
}

/// Filter residual noise out of collected name parts and join them.
fn normalize_name(parts: &[&str]) -> Option<String> {
    let meaningful: Vec<&str> = parts
        .iter()
        .copied()
        .filter(|part| part.chars().count() > 1 && !is_numeric_noise(part))
        .collect();

    if meaningful.is_empty() {
        return None;
    }

    let joined = meaningful.concat();
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// True for fragments that are a bare number once separators, signs,
/// percent marks and currency markers are stripped: `1,234.5`, `-3.2%`,
/// `HK$120.50`. Such fragments never belong in a holding name.
fn is_numeric_noise(text: &str) -> bool {
    let mut stripped = text.replace(',', "");
    stripped = stripped.replace('.', "");
    stripped = stripped.replace('-', "");
    stripped = stripped.replace('%', "");
    for marker in CURRENCY_MARKERS {
        stripped = stripped.replace(marker, "");
    }
    stripped = stripped.replace(YUAN_SIGN, "");

    let stripped = stripped.trim();
    !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit())
}

/// True when the text contains at least one decimal digit.
pub(crate) fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}
