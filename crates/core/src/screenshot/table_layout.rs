//! Geometric reconstruction: header anchors, row clustering, data row
//! selection and column assignment.

use std::cmp::Ordering;

use super::table_model::{ColumnAnchors, ColumnKind, Row, Token};

/// Locate the header line by keyword and derive the column anchors.
///
/// Each column binds to the first token containing one of its keywords,
/// in the engine's reading order. Returns `None` when no column keyword
/// appears anywhere, meaning the image does not show a positions table
/// this parser understands.
pub fn locate_anchors(tokens: &[Token]) -> Option<ColumnAnchors> {
    let mut anchors: Vec<(ColumnKind, f64)> = Vec::new();
    let mut header_y = f64::INFINITY;
    let mut name_boundary = f64::INFINITY;

    for kind in ColumnKind::ALL {
        let matched = tokens
            .iter()
            .find(|token| kind.keywords().iter().any(|kw| token.text.contains(kw)));
        if let Some(token) = matched {
            anchors.push((kind, token.cx));
            header_y = header_y.min(token.cy);
            name_boundary = name_boundary.min(token.cx);
        }
    }

    if anchors.is_empty() {
        return None;
    }

    Some(ColumnAnchors::new(anchors, header_y, name_boundary))
}

/// Cluster the tokens beneath the header into visual rows.
///
/// Tokens are taken in vertical order; a token joins the current row
/// while its vertical distance to the previous token stays within
/// `row_tolerance`, otherwise it starts a new row. The comparison is
/// against the previous token rather than the row's first token, so a
/// row may drift vertically across the screen width.
pub fn cluster_rows(
    tokens: &[Token],
    header_y: f64,
    header_margin: f64,
    row_tolerance: f64,
) -> Vec<Row> {
    let mut below: Vec<&Token> = tokens
        .iter()
        .filter(|token| token.cy > header_y + header_margin)
        .collect();
    below.sort_by(|a, b| a.cy.partial_cmp(&b.cy).unwrap_or(Ordering::Equal));

    let mut rows: Vec<Row> = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut last_cy: Option<f64> = None;

    for token in below {
        if let Some(prev) = last_cy {
            if (token.cy - prev).abs() > row_tolerance {
                rows.push(Row::new(std::mem::take(&mut current)));
            }
        }
        current.push(token.clone());
        last_cy = Some(token.cy);
    }
    if !current.is_empty() {
        rows.push(Row::new(current));
    }

    rows
}

/// Select the rows that hold actual position data.
///
/// Rows up to and including the start marker are account-summary chrome;
/// rows without a single digit are separators or banners. When the
/// marker is absent (cropped screenshots), every clustered row is a
/// candidate.
pub fn select_data_rows(rows: Vec<Row>, start_marker: &str) -> Vec<Row> {
    let start = rows
        .iter()
        .position(|row| row.contains_marker(start_marker))
        .map(|idx| idx + 1)
        .unwrap_or(0);

    rows.into_iter()
        .skip(start)
        .filter(|row| row.has_digit_content())
        .collect()
}

/// Texts of the tokens in `row` assigned to `column`, in row order.
///
/// Empty when the column's header keyword never matched; the caller
/// decides which fallback row or column to consult next.
pub fn collect_column_texts(
    row: &Row,
    column: ColumnKind,
    anchors: &ColumnAnchors,
    max_distance: Option<f64>,
) -> Vec<String> {
    if !anchors.contains(column) {
        return Vec::new();
    }

    row.tokens
        .iter()
        .filter(|token| anchors.nearest(token.cx, max_distance) == Some(column))
        .map(|token| token.text.clone())
        .collect()
}
