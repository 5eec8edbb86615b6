use std::num::NonZeroUsize;

use rust_decimal_macros::dec;

use super::table_layout::{cluster_rows, locate_anchors, select_data_rows};
use super::table_model::{ColumnKind, Row, Token};
use super::table_parser::{TableConfig, TableParser};

/// Header line of the standard two-row layout, in reading order.
fn header() -> Vec<Token> {
    vec![
        Token::new("名称", 80.0, 100.0),
        Token::new("持仓/可用", 400.0, 100.0),
        Token::new("现价/成本", 600.0, 102.0),
        Token::new("市值", 800.0, 101.0),
        Token::new("盈亏", 950.0, 99.0),
    ]
}

/// A full two-holding screenshot: header, start marker, then two row
/// pairs laid out like a Futu positions view.
fn standard_screenshot() -> Vec<Token> {
    let mut tokens = header();
    tokens.push(Token::new("持仓股", 90.0, 140.0));

    // Holding one: upper row carries name and volume, lower row carries
    // cost/current price, market value and profit.
    tokens.push(Token::new("腾讯控股", 90.0, 180.0));
    tokens.push(Token::new("500", 400.0, 180.0));
    tokens.push(Token::new("320.500 305.000", 600.0, 210.0));
    tokens.push(Token::new("152,500.00", 800.0, 210.0));
    tokens.push(Token::new("-7,750.00", 950.0, 210.0));

    // Holding two.
    tokens.push(Token::new("小米集团-W", 90.0, 250.0));
    tokens.push(Token::new("2,000", 400.0, 250.0));
    tokens.push(Token::new("18.660/17.200", 600.0, 280.0));
    tokens.push(Token::new("34,400.00", 800.0, 280.0));
    tokens.push(Token::new("-2,920.00", 950.0, 280.0));

    tokens
}

#[test]
fn test_parse_standard_two_row_layout() {
    let parser = TableParser::default();
    let holdings = parser.parse("shot-1.png", &standard_screenshot());

    assert_eq!(holdings.len(), 2);

    let tencent = &holdings[0];
    assert_eq!(tencent.name, "腾讯控股");
    assert_eq!(tencent.symbol.as_deref(), Some("腾讯控股"));
    assert_eq!(tencent.quantity, Some(dec!(500)));
    assert_eq!(tencent.cost_price, Some(dec!(305.000)));
    assert_eq!(tencent.market_value, dec!(152500.00));

    let xiaomi = &holdings[1];
    assert_eq!(xiaomi.name, "小米集团-W");
    assert_eq!(xiaomi.quantity, Some(dec!(2000)));
    assert_eq!(xiaomi.cost_price, Some(dec!(17.200)));
    assert_eq!(xiaomi.market_value, dec!(34400.00));
}

#[test]
fn test_parse_empty_token_list_yields_nothing() {
    let parser = TableParser::default();
    assert!(parser.parse("empty.png", &[]).is_empty());
}

#[test]
fn test_parse_without_header_yields_nothing() {
    let tokens = vec![
        Token::new("名称", 80.0, 100.0),
        Token::new("腾讯控股", 90.0, 180.0),
        Token::new("152,500.00", 800.0, 210.0),
    ];
    let parser = TableParser::default();
    assert!(parser.parse("cropped.png", &tokens).is_empty());
}

#[test]
fn test_locate_anchors_uses_topmost_header_token() {
    let anchors = locate_anchors(&header()).unwrap();

    assert_eq!(anchors.header_y, 99.0);
    assert_eq!(anchors.name_boundary, 400.0);
    assert_eq!(anchors.position(ColumnKind::Volume), Some(400.0));
    assert_eq!(anchors.position(ColumnKind::Cost), Some(600.0));
    assert_eq!(anchors.position(ColumnKind::Value), Some(800.0));
    assert_eq!(anchors.position(ColumnKind::Profit), Some(950.0));
}

#[test]
fn test_locate_anchors_none_without_keywords() {
    let tokens = vec![
        Token::new("名称", 80.0, 100.0),
        Token::new("数量", 400.0, 100.0),
    ];
    assert!(locate_anchors(&tokens).is_none());
}

#[test]
fn test_locate_anchors_partial_header() {
    let tokens = vec![Token::new("市值", 800.0, 101.0)];
    let anchors = locate_anchors(&tokens).unwrap();

    assert!(anchors.contains(ColumnKind::Value));
    assert!(!anchors.contains(ColumnKind::Volume));
    assert!(!anchors.contains(ColumnKind::Cost));
    assert_eq!(anchors.name_boundary, 800.0);
}

#[test]
fn test_cluster_rows_splits_on_vertical_gap() {
    let tokens: Vec<Token> = [100.0, 102.0, 105.0, 140.0, 142.0]
        .iter()
        .enumerate()
        .map(|(i, cy)| Token::new(format!("t{}", i), 10.0, *cy))
        .collect();

    let rows = cluster_rows(&tokens, 0.0, 20.0, 25.0);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].tokens.len(), 3);
    assert_eq!(rows[1].tokens.len(), 2);
}

#[test]
fn test_cluster_rows_chains_on_previous_token() {
    // 300 -> 320 -> 340: each step is within tolerance even though the
    // endpoints are not.
    let tokens = vec![
        Token::new("a", 10.0, 300.0),
        Token::new("b", 20.0, 320.0),
        Token::new("c", 30.0, 340.0),
    ];
    let rows = cluster_rows(&tokens, 0.0, 20.0, 25.0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tokens.len(), 3);
}

#[test]
fn test_cluster_rows_drops_header_zone_tokens() {
    let tokens = vec![
        Token::new("above", 10.0, 115.0),
        Token::new("edge", 20.0, 120.0),
        Token::new("below", 30.0, 125.0),
    ];
    let rows = cluster_rows(&tokens, 100.0, 20.0, 25.0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tokens.len(), 1);
    assert_eq!(rows[0].tokens[0].text, "below");
}

#[test]
fn test_select_data_rows_starts_after_marker() {
    let rows = vec![
        Row::new(vec![Token::new("总市值 188,000", 90.0, 140.0)]),
        Row::new(vec![Token::new("持仓股", 90.0, 170.0)]),
        Row::new(vec![Token::new("腾讯控股", 90.0, 200.0), Token::new("500", 400.0, 200.0)]),
    ];
    let data = select_data_rows(rows, "持仓股");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].tokens[0].text, "腾讯控股");
}

#[test]
fn test_select_data_rows_without_marker_filters_digitless() {
    let rows = vec![
        Row::new(vec![Token::new("腾讯控股", 90.0, 180.0), Token::new("500", 400.0, 180.0)]),
        Row::new(vec![Token::new("今日更新", 90.0, 210.0)]),
        Row::new(vec![Token::new("34,400.00", 800.0, 240.0)]),
    ];
    let data = select_data_rows(rows, "持仓股");
    assert_eq!(data.len(), 2);
}

#[test]
fn test_parse_partial_header_still_extracts() {
    let tokens = vec![
        Token::new("市值", 800.0, 100.0),
        Token::new("腾讯控股", 90.0, 180.0),
        Token::new("500", 400.0, 180.0),
        Token::new("44,000.00", 800.0, 210.0),
    ];

    let parser = TableParser::default();
    let holdings = parser.parse("partial.png", &tokens);

    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].name, "腾讯控股");
    assert_eq!(holdings[0].market_value, dec!(44000.00));
    // No volume or cost column to read from: quantity coerces to zero.
    assert_eq!(holdings[0].quantity, Some(dec!(0)));
    assert_eq!(holdings[0].cost_price, None);
}

#[test]
fn test_parse_single_row_layout() {
    let mut tokens = header();
    tokens.push(Token::new("持仓股", 90.0, 140.0));
    tokens.push(Token::new("腾讯控股", 90.0, 180.0));
    tokens.push(Token::new("500", 400.0, 180.0));
    tokens.push(Token::new("88.00", 600.0, 180.0));
    tokens.push(Token::new("44,000.00", 800.0, 180.0));
    tokens.push(Token::new("美团点评", 90.0, 210.0));
    tokens.push(Token::new("300", 400.0, 210.0));
    tokens.push(Token::new("120.00", 600.0, 210.0));
    tokens.push(Token::new("36,000.00", 800.0, 210.0));

    let config = TableConfig {
        rows_per_holding: NonZeroUsize::new(1).unwrap(),
        ..TableConfig::default()
    };
    let holdings = TableParser::new(config).parse("compact.png", &tokens);

    assert_eq!(holdings.len(), 2);
    assert_eq!(holdings[0].name, "腾讯控股");
    assert_eq!(holdings[0].quantity, Some(dec!(500)));
    assert_eq!(holdings[0].cost_price, Some(dec!(88.00)));
    assert_eq!(holdings[0].market_value, dec!(44000.00));
    assert_eq!(holdings[1].name, "美团点评");
    assert_eq!(holdings[1].market_value, dec!(36000.00));
}

#[test]
fn test_parse_odd_trailing_row_without_value_is_dropped() {
    let mut tokens = standard_screenshot();
    // A third holding clipped at the bottom edge: only its upper row made
    // it into the capture.
    tokens.push(Token::new("京东集团", 90.0, 320.0));
    tokens.push(Token::new("300", 400.0, 320.0));

    let parser = TableParser::default();
    let holdings = parser.parse("clipped.png", &tokens);

    assert_eq!(holdings.len(), 2);
    assert!(holdings.iter().all(|h| h.name != "京东集团"));
}

#[test]
fn test_parse_quantity_falls_back_to_cost_column() {
    let mut tokens = header();
    tokens.push(Token::new("持仓股", 90.0, 140.0));
    // Layout variant: prices sit in the upper row and no volume number
    // exists anywhere; quantity falls back to the first cost figure.
    tokens.push(Token::new("小米集团", 90.0, 180.0));
    tokens.push(Token::new("320.500 305.000", 600.0, 180.0));
    tokens.push(Token::new("34,400.00", 800.0, 210.0));

    let parser = TableParser::default();
    let holdings = parser.parse("variant.png", &tokens);

    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0].quantity, Some(dec!(320.500)));
    assert_eq!(holdings[0].cost_price, Some(dec!(305.000)));
    assert_eq!(holdings[0].market_value, dec!(34400.00));
}

#[test]
fn test_parse_profit_not_mistaken_for_value() {
    let mut tokens = header();
    tokens.push(Token::new("持仓股", 90.0, 140.0));
    tokens.push(Token::new("腾讯控股", 90.0, 180.0));
    tokens.push(Token::new("500", 400.0, 180.0));
    // Lower row shows only the loss; the market value cell was cut off.
    tokens.push(Token::new("-7,750.00", 950.0, 210.0));

    let parser = TableParser::default();
    assert!(parser.parse("cutoff.png", &tokens).is_empty());
}

#[test]
fn test_default_config_matches_layout_constants() {
    let parser = TableParser::default();
    let config = parser.config();
    assert_eq!(config.header_margin, 20.0);
    assert_eq!(config.row_tolerance, 25.0);
    assert_eq!(config.name_margin, 180.0);
    assert_eq!(config.rows_per_holding.get(), 2);
    assert_eq!(config.max_anchor_distance, None);
}
