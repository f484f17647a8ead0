// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{BudgetRow, budget_overview};
use crate::app::{App, Event, Intent};
use crate::categories;
use crate::form::{MAX_AMOUNT, MAX_DECIMAL_PLACES, parse_budget_limit};
use crate::models::{TransactionType, View};
use crate::storage::KeyValueStore;
use crate::utils::{arg, fmt_percent, fmt_whole, maybe_print_json, pretty_table};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const BAR_WIDTH: usize = 20;

pub fn handle<S: KeyValueStore>(
    app: &mut App<S>,
    m: &clap::ArgMatches,
    today: NaiveDate,
    symbol: &str,
) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(app, sub, symbol)?,
        Some(("list", sub)) => list(app, sub, today, symbol)?,
        _ => {}
    }
    Ok(())
}

fn set<S: KeyValueStore>(app: &mut App<S>, sub: &clap::ArgMatches, symbol: &str) -> Result<()> {
    let category = arg(sub, "category")?.trim();
    if categories::find_for_type(TransactionType::Expense, category).is_none() {
        let valid: Vec<&str> = categories::EXPENSE_CATEGORIES.iter().map(|c| c.id).collect();
        bail!(
            "Budgets apply to expense categories; '{}' is not one of: {}",
            category,
            valid.join(", ")
        );
    }
    let Some(limit) = parse_budget_limit(arg(sub, "limit")?) else {
        println!(
            "Ignored: limit must be a number from 0 to {} with at most {} decimals",
            MAX_AMOUNT, MAX_DECIMAL_PLACES
        );
        return Ok(());
    };

    match app.dispatch(Intent::SetBudget {
        category_id: category.to_string(),
        limit,
    }) {
        Event::BudgetSet { category_id, limit } => println!(
            "Budget for {} set to {} per month",
            categories::label(&category_id),
            fmt_whole(&limit, symbol)
        ),
        Event::BudgetRemoved(category_id) => {
            println!("Budget for {} removed", categories::label(&category_id))
        }
        _ => {}
    }
    Ok(())
}

/// Budget view rows for the month containing `today`.
pub fn overview<S: KeyValueStore>(app: &mut App<S>, today: NaiveDate) -> Vec<BudgetRow> {
    app.dispatch(Intent::Navigate(View::Budgets));
    budget_overview(app.transactions(), app.budgets().all(), today)
}

fn list<S: KeyValueStore>(
    app: &mut App<S>,
    sub: &clap::ArgMatches,
    today: NaiveDate,
    symbol: &str,
) -> Result<()> {
    let rows = overview(app, today);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        render(&rows, today, symbol);
    }
    Ok(())
}

pub fn render(rows: &[BudgetRow], today: NaiveDate, symbol: &str) {
    println!("Budgets for {}", today.format("%Y-%m"));
    let data: Vec<Vec<String>> = rows
        .iter()
        .map(|row| match &row.status {
            None => vec![
                row.label.to_string(),
                fmt_whole(&row.spent, symbol),
                "-".into(),
                String::new(),
                "No budget set".into(),
            ],
            Some(status) => {
                let filled = (status.fill_percentage() * Decimal::from(BAR_WIDTH)
                    / Decimal::ONE_HUNDRED)
                    .round()
                    .to_usize()
                    .unwrap_or(0)
                    .min(BAR_WIDTH);
                let bar = format!(
                    "{}{} {}",
                    "#".repeat(filled),
                    ".".repeat(BAR_WIDTH - filled),
                    fmt_percent(&status.percentage)
                );
                let state = if status.over_budget {
                    format!("Over by {}", fmt_whole(&status.overage(), symbol))
                } else if status.near_limit {
                    format!("Near limit, {} left", fmt_whole(&status.remaining(), symbol))
                } else {
                    format!("{} left", fmt_whole(&status.remaining(), symbol))
                };
                vec![
                    row.label.to_string(),
                    fmt_whole(&row.spent, symbol),
                    fmt_whole(&status.limit, symbol),
                    bar,
                    state,
                ]
            }
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Spent", "Limit", "Progress", "Status"], data)
    );
}
