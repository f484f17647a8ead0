// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{
    CategoryTotal, DailyTotals, Totals, TrendPoint, category_breakdown, last_seven_days,
    net_worth_trend, saturating_sum, totals, uncategorized_total,
};
use crate::app::{App, Intent};
use crate::models::{Transaction, TransactionType, View};
use crate::storage::KeyValueStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub totals: Totals,
    pub income_by_category: Vec<CategoryTotal>,
    pub expense_by_category: Vec<CategoryTotal>,
    pub uncategorized_income: Decimal,
    pub uncategorized_expense: Decimal,
    pub last_seven_days: Vec<DailyTotals>,
    pub net_worth_trend: Vec<TrendPoint>,
}

impl Dashboard {
    pub fn compute(transactions: &[Transaction], today: NaiveDate) -> Self {
        Self {
            totals: totals(transactions),
            income_by_category: category_breakdown(transactions, TransactionType::Income),
            expense_by_category: category_breakdown(transactions, TransactionType::Expense),
            uncategorized_income: uncategorized_total(transactions, TransactionType::Income),
            uncategorized_expense: uncategorized_total(transactions, TransactionType::Expense),
            last_seven_days: last_seven_days(transactions, today),
            net_worth_trend: net_worth_trend(transactions),
        }
    }
}

pub fn handle<S: KeyValueStore>(
    app: &mut App<S>,
    sub: Option<&clap::ArgMatches>,
    today: NaiveDate,
    symbol: &str,
) -> Result<()> {
    app.dispatch(Intent::Navigate(View::Dashboard));
    let dash = Dashboard::compute(app.transactions(), today);
    let (json_flag, jsonl_flag) = sub
        .map(|s| (s.get_flag("json"), s.get_flag("jsonl")))
        .unwrap_or((false, false));
    if !maybe_print_json(json_flag, jsonl_flag, &dash)? {
        render(&dash, symbol);
    }
    Ok(())
}

fn breakdown_table(title: &str, items: &[CategoryTotal], other: Decimal, symbol: &str) {
    println!("{}", title);
    if items.is_empty() && other.is_zero() {
        println!("  (no data)");
        return;
    }
    let total = saturating_sum(items.iter().map(|c| c.value).chain([other]));
    let share = |v: Decimal| match v
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    {
        Some(pct) => crate::utils::fmt_percent(&pct),
        None => "0%".to_string(),
    };
    let mut rows: Vec<Vec<String>> = items
        .iter()
        .map(|c| {
            vec![
                c.label.to_string(),
                fmt_money(&c.value, symbol),
                share(c.value),
                c.color.to_string(),
            ]
        })
        .collect();
    if !other.is_zero() {
        rows.push(vec![
            crate::categories::UNKNOWN_CATEGORY_LABEL.to_string(),
            fmt_money(&other, symbol),
            share(other),
            String::new(),
        ]);
    }
    println!(
        "{}",
        pretty_table(&["Category", "Amount", "Share", "Color"], rows)
    );
}

pub fn render(dash: &Dashboard, symbol: &str) {
    println!(
        "{}",
        pretty_table(
            &["Total income", "Total expense", "Balance"],
            vec![vec![
                fmt_money(&dash.totals.income, symbol),
                fmt_money(&dash.totals.expense, symbol),
                fmt_money(&dash.totals.balance, symbol),
            ]],
        )
    );

    breakdown_table(
        "Income by category",
        &dash.income_by_category,
        dash.uncategorized_income,
        symbol,
    );
    breakdown_table(
        "Expense by category",
        &dash.expense_by_category,
        dash.uncategorized_expense,
        symbol,
    );

    println!("Last 7 days");
    let daily: Vec<Vec<String>> = dash
        .last_seven_days
        .iter()
        .map(|d| {
            vec![
                d.date.format("%m-%d").to_string(),
                fmt_money(&d.income, symbol),
                fmt_money(&d.expense, symbol),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Day", "Income", "Expense"], daily));

    println!("Net worth trend");
    if dash.net_worth_trend.is_empty() {
        println!("  (no data)");
        return;
    }
    let trend: Vec<Vec<String>> = dash
        .net_worth_trend
        .iter()
        .map(|p| vec![p.date.format("%m-%d").to_string(), fmt_money(&p.net_worth, symbol)])
        .collect();
    println!("{}", pretty_table(&["Date", "Net worth"], trend));
}
