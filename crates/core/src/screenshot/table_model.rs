//! Geometry-bearing types for reconstructed screenshot tables.

use snapfolio_ocr::RawToken;

use super::field_extract::contains_digit;
use super::screenshot_constants::{
    COST_KEYWORDS, PROFIT_KEYWORDS, VALUE_KEYWORDS, VOLUME_KEYWORDS,
};

/// One cleaned OCR token: trimmed text plus the center of its bounding
/// box in image pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub cx: f64,
    pub cy: f64,
}

impl Token {
    pub fn new(text: impl Into<String>, cx: f64, cy: f64) -> Self {
        Self {
            text: text.into(),
            cx,
            cy,
        }
    }

    /// Convert an engine token, trimming the text. Fragments that are
    /// empty after trimming carry no layout information and yield `None`.
    pub fn from_raw(raw: &RawToken) -> Option<Self> {
        let text = raw.text.trim();
        if text.is_empty() {
            return None;
        }
        let (cx, cy) = raw.center();
        Some(Self::new(text, cx, cy))
    }
}

/// Convert an engine token list, dropping empty fragments and keeping
/// the engine's reading order.
pub fn tokens_from_raw(raw: &[RawToken]) -> Vec<Token> {
    raw.iter().filter_map(Token::from_raw).collect()
}

/// The four value columns of a positions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Value,
    Profit,
    Volume,
    Cost,
}

impl ColumnKind {
    /// All columns, in the fixed order used to break nearest-anchor ties.
    pub const ALL: [ColumnKind; 4] = [
        ColumnKind::Value,
        ColumnKind::Profit,
        ColumnKind::Volume,
        ColumnKind::Cost,
    ];

    /// Header keywords identifying this column, matched by substring.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ColumnKind::Value => VALUE_KEYWORDS,
            ColumnKind::Profit => PROFIT_KEYWORDS,
            ColumnKind::Volume => VOLUME_KEYWORDS,
            ColumnKind::Cost => COST_KEYWORDS,
        }
    }
}

/// Horizontal anchor positions of the header columns that matched, plus
/// the reference lines derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnAnchors {
    anchors: Vec<(ColumnKind, f64)>,
    /// Vertical center of the topmost matched header token.
    pub header_y: f64,
    /// Horizontal center of the leftmost matched header token. Name
    /// fragments live to the left of this line, give or take a margin.
    pub name_boundary: f64,
}

impl ColumnAnchors {
    pub(crate) fn new(anchors: Vec<(ColumnKind, f64)>, header_y: f64, name_boundary: f64) -> Self {
        Self {
            anchors,
            header_y,
            name_boundary,
        }
    }

    /// Anchor x of one column, if its header keyword matched.
    pub fn position(&self, kind: ColumnKind) -> Option<f64> {
        self.anchors
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, x)| *x)
    }

    pub fn contains(&self, kind: ColumnKind) -> bool {
        self.position(kind).is_some()
    }

    /// The column whose anchor is horizontally nearest to `cx`.
    ///
    /// Ties go to the earlier column in [`ColumnKind::ALL`]. With
    /// `max_distance` set, a token farther than that from every anchor
    /// belongs to no column.
    pub fn nearest(&self, cx: f64, max_distance: Option<f64>) -> Option<ColumnKind> {
        let mut best: Option<(ColumnKind, f64)> = None;
        for (kind, x) in &self.anchors {
            let distance = (x - cx).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((*kind, distance)),
            }
        }

        match best {
            Some((_, distance)) if max_distance.is_some_and(|limit| distance > limit) => None,
            Some((kind, _)) => Some(kind),
            None => None,
        }
    }
}

/// One visual row: the tokens whose vertical centers clustered together,
/// still in horizontal disorder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub tokens: Vec<Token>,
}

impl Row {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when any token in the row carries a decimal digit. Separator
    /// and banner rows do not.
    pub fn has_digit_content(&self) -> bool {
        self.tokens.iter().any(|token| contains_digit(&token.text))
    }

    /// True when any token's text contains `marker`.
    pub fn contains_marker(&self, marker: &str) -> bool {
        self.tokens.iter().any(|token| token.text.contains(marker))
    }
}
