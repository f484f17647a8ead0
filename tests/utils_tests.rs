// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use smartledger::categories::{self, UNKNOWN_CATEGORY_LABEL};
use smartledger::db;
use smartledger::models::{TransactionType, View};
use smartledger::utils::{
    DEFAULT_CURRENCY_SYMBOL, fmt_money, fmt_percent, fmt_whole, get_currency_symbol, highlight,
    set_currency_symbol,
};

#[test]
fn money_rounds_half_away_from_zero() {
    assert_eq!(fmt_money(&Decimal::new(12345, 3), "¥"), "¥12.35");
    assert_eq!(fmt_money(&Decimal::new(7, 0), "$"), "$7.00");
    assert_eq!(fmt_whole(&Decimal::new(25, 1), "¥"), "¥3");
    assert_eq!(fmt_percent(&Decimal::new(7950, 2)), "80%");
}

#[test]
fn highlight_is_case_insensitive_and_literal() {
    assert_eq!(highlight("Team Lunch", "lunch"), "Team [Lunch]");
    assert_eq!(highlight("a.b.c", "."), "a[.]b[.]c");
    assert_eq!(highlight("unchanged", ""), "unchanged");
}

#[test]
fn currency_symbol_setting() {
    let conn = db::open_in_memory().unwrap();
    assert_eq!(get_currency_symbol(&conn).unwrap(), DEFAULT_CURRENCY_SYMBOL);
    set_currency_symbol(&conn, "€").unwrap();
    assert_eq!(get_currency_symbol(&conn).unwrap(), "€");
}

#[test]
fn category_registry() {
    assert_eq!(categories::for_type(TransactionType::Expense).len(), 7);
    assert_eq!(categories::for_type(TransactionType::Income).len(), 4);
    assert_eq!(categories::all().count(), 11);
    assert_eq!(categories::label("housing"), "Housing & Utilities");
    assert_eq!(categories::label("crypto"), UNKNOWN_CATEGORY_LABEL);
    assert!(categories::find_for_type(TransactionType::Income, "food").is_none());
    assert!(categories::all().all(|c| c.color.starts_with('#')));
}

#[test]
fn views_parse_by_slug() {
    assert_eq!("ai-insights".parse::<View>().unwrap(), View::AiInsights);
    assert_eq!(View::default(), View::Dashboard);
    assert!("reports".parse::<View>().is_err());
}
