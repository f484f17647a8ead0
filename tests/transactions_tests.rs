// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use smartledger::app::{App, Intent};
use smartledger::models::{NewTransaction, TransactionType, View};
use smartledger::storage::MemoryStore;
use smartledger::{cli, commands::transactions};
use std::time::Duration;

fn setup() -> App<MemoryStore> {
    let mut app = App::load(MemoryStore::new(), Duration::ZERO);
    let rows = [
        ("2025-01-01", TransactionType::Income, "3000", "salary", "January pay"),
        ("2025-01-02", TransactionType::Expense, "12", "food", "Lunch"),
        ("2025-01-03", TransactionType::Expense, "45", "transport", "Fuel"),
        ("2025-01-04", TransactionType::Expense, "8.5", "food", "coffee"),
    ];
    for (date, kind, amount, category, note) in rows {
        app.dispatch(Intent::AddTransaction(NewTransaction {
            amount: amount.parse().unwrap(),
            kind,
            category: category.into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            note: note.into(),
        }));
    }
    app
}

fn list_rows(app: &mut App<MemoryStore>, args: &[&str]) -> Vec<transactions::TransactionRow> {
    let mut argv = vec!["smartledger", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            transactions::query_rows(app, list_m).unwrap()
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_limit_respected() {
    let mut app = setup();
    let rows = list_rows(&mut app, &["--limit", "2"]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date.to_string(), "2025-01-04");
    assert_eq!(rows[1].date.to_string(), "2025-01-03");
    assert_eq!(app.view(), View::Transactions);
}

#[test]
fn list_filters_by_type() {
    let mut app = setup();
    let rows = list_rows(&mut app, &["--type", "income"]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Salary");
    assert_eq!(rows[0].category_id, "salary");
}

#[test]
fn list_search_matches_note_or_label() {
    let mut app = setup();
    let rows = list_rows(&mut app, &["--search", "DINING"]);
    let notes: Vec<&str> = rows.iter().map(|r| r.note.as_str()).collect();
    assert_eq!(notes, vec!["coffee", "Lunch"]);

    let rows = list_rows(&mut app, &["--search", "fuel", "--type", "income"]);
    assert!(rows.is_empty());
}

#[test]
fn rows_serialize_with_type_field() {
    let mut app = setup();
    let rows = list_rows(&mut app, &["--limit", "1"]);
    let v = serde_json::to_value(&rows).unwrap();
    assert_eq!(v[0]["type"], "expense");
    assert_eq!(v[0]["category"], "Food & Dining");
    assert_eq!(v[0]["date"], "2025-01-04");
}

#[test]
fn add_parses_defaults() {
    let matches = cli::build_cli().get_matches_from([
        "smartledger",
        "tx",
        "add",
        "--amount",
        "9.99",
        "--category",
        "shopping",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("add", add_m)) = tx_m.subcommand() else {
        panic!("no add subcommand");
    };
    assert_eq!(add_m.get_one::<String>("type").unwrap(), "expense");
    assert!(add_m.get_one::<String>("date").is_none());
}
