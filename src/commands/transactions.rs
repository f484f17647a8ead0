// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{TypeFilter, filter_transactions};
use crate::app::{App, Event, Intent};
use crate::categories;
use crate::form::TransactionForm;
use crate::models::{TransactionType, View};
use crate::storage::KeyValueStore;
use crate::utils::{arg, fmt_money, highlight, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{self, BufRead, Write};

pub fn handle<S: KeyValueStore>(
    app: &mut App<S>,
    m: &clap::ArgMatches,
    today: NaiveDate,
    symbol: &str,
) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub, today, symbol)?,
        Some(("list", sub)) => list(app, sub, symbol)?,
        Some(("rm", sub)) => rm(app, sub, symbol)?,
        _ => {}
    }
    Ok(())
}

fn add<S: KeyValueStore>(
    app: &mut App<S>,
    sub: &clap::ArgMatches,
    today: NaiveDate,
    symbol: &str,
) -> Result<()> {
    let kind: TransactionType = arg(sub, "type")?.parse().map_err(|e: String| anyhow!(e))?;
    let form = TransactionForm {
        kind,
        amount: arg(sub, "amount")?.to_string(),
        category: arg(sub, "category")?.to_string(),
        date: sub
            .get_one::<String>("date")
            .cloned()
            .unwrap_or_else(|| today.to_string()),
        note: sub.get_one::<String>("note").cloned().unwrap_or_default(),
    };
    let candidate = form.validate()?;

    if let Event::Added(tx) = app.dispatch(Intent::AddTransaction(candidate)) {
        println!(
            "Recorded {} {} ({}) on {} [id {}]",
            tx.kind,
            fmt_money(&tx.amount, symbol),
            categories::label(&tx.category),
            tx.date,
            tx.id
        );
    }
    Ok(())
}

fn list<S: KeyValueStore>(app: &mut App<S>, sub: &clap::ArgMatches, symbol: &str) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(app, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    let search = sub
        .get_one::<String>("search")
        .map(|s| s.as_str())
        .unwrap_or("");
    render(app.transactions().len(), &data, search, symbol);
    Ok(())
}

pub fn render(total: usize, data: &[TransactionRow], search: &str, symbol: &str) {
    println!("Transactions ({} records)", total);
    if total == 0 {
        println!("No transactions yet. Add one with `smartledger tx add`.");
        return;
    }
    if data.is_empty() {
        println!("No transactions match the current filter.");
        return;
    }
    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|r| {
            let sign = if r.kind == TransactionType::Expense {
                "-"
            } else {
                "+"
            };
            vec![
                r.date.to_string(),
                r.kind.label().to_string(),
                highlight(&r.category, search),
                format!("{}{}", sign, fmt_money(&r.amount, symbol)),
                highlight(&r.note, search),
                r.id.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Type", "Category", "Amount", "Note", "Id"], rows)
    );
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category_id: String,
    pub category: String,
    pub amount: rust_decimal::Decimal,
    pub note: String,
}

/// Rows for the list view, parsed from `tx list` arguments.
pub fn query_rows<S: KeyValueStore>(
    app: &mut App<S>,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter: TypeFilter = sub
        .get_one::<String>("type")
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| anyhow!(e))?
        .unwrap_or_default();
    let search = sub
        .get_one::<String>("search")
        .map(|s| s.as_str())
        .unwrap_or("");
    let limit = sub.get_one::<usize>("limit").copied();
    Ok(rows(app, filter, search, limit))
}

/// Newest first, filtered by type and search text.
pub fn rows<S: KeyValueStore>(
    app: &mut App<S>,
    filter: TypeFilter,
    search: &str,
    limit: Option<usize>,
) -> Vec<TransactionRow> {
    app.dispatch(Intent::Navigate(View::Transactions));
    filter_transactions(app.transactions(), filter, search)
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date,
            kind: t.kind,
            category_id: t.category.clone(),
            category: categories::label(&t.category).to_string(),
            amount: t.amount,
            note: t.note.clone(),
        })
        .collect()
}

fn rm<S: KeyValueStore>(app: &mut App<S>, sub: &clap::ArgMatches, symbol: &str) -> Result<()> {
    let id = arg(sub, "id")?.to_string();
    let skip_prompt = sub.get_flag("yes");

    let prompt = match app.state().transactions.get(&id) {
        Some(tx) => format!(
            "Delete {} {} ({}) on {}? [y/N] ",
            tx.kind,
            fmt_money(&tx.amount, symbol),
            categories::label(&tx.category),
            tx.date
        ),
        None => format!("Delete transaction {}? [y/N] ", id),
    };

    app.dispatch(Intent::RequestDelete(id));
    let confirmed = skip_prompt || confirm(&prompt)?;
    let intent = if confirmed {
        Intent::ConfirmDelete
    } else {
        Intent::CancelDelete
    };

    match app.dispatch(intent) {
        Event::Deleted(id) => println!("Deleted transaction {}", id),
        Event::DeleteNotFound(id) => println!("No transaction with id {}; nothing deleted", id),
        Event::DeleteCancelled => println!("Cancelled"),
        _ => {}
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    let mut out = io::stdout();
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}
