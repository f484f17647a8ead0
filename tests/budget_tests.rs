// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use smartledger::app::{App, Intent};
use smartledger::models::{NewTransaction, TransactionType, View};
use smartledger::storage::MemoryStore;
use smartledger::{cli, commands::budgets};
use std::time::Duration;

fn setup() -> App<MemoryStore> {
    let mut app = App::load(MemoryStore::new(), Duration::ZERO);
    for (date, amount) in [("2025-08-03", "60"), ("2025-08-20", "45"), ("2025-07-31", "500")] {
        app.dispatch(Intent::AddTransaction(NewTransaction {
            amount: amount.parse().unwrap(),
            kind: TransactionType::Expense,
            category: "food".into(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            note: String::new(),
        }));
    }
    app.dispatch(Intent::SetBudget {
        category_id: "food".into(),
        limit: Decimal::new(100, 0),
    });
    app.dispatch(Intent::SetBudget {
        category_id: "transport".into(),
        limit: Decimal::new(50, 0),
    });
    app
}

#[test]
fn overview_uses_current_month_only() {
    let mut app = setup();
    let today = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
    let rows = budgets::overview(&mut app, today);
    assert_eq!(app.view(), View::Budgets);

    let food = rows.iter().find(|r| r.category_id == "food").unwrap();
    assert_eq!(food.spent, Decimal::new(105, 0));
    let status = food.status.unwrap();
    assert!(status.over_budget);
    assert_eq!(status.overage(), Decimal::new(5, 0));

    let transport = rows.iter().find(|r| r.category_id == "transport").unwrap();
    assert_eq!(transport.spent, Decimal::ZERO);
    assert!(!transport.status.unwrap().near_limit);

    let health = rows.iter().find(|r| r.category_id == "health").unwrap();
    assert!(health.status.is_none());
}

#[test]
fn set_accepts_negative_looking_limit_argument() {
    let matches = cli::build_cli().get_matches_from(["smartledger", "budget", "set", "food", "-5"]);
    let Some(("budget", b)) = matches.subcommand() else {
        panic!("no budget subcommand");
    };
    let Some(("set", set_m)) = b.subcommand() else {
        panic!("no set subcommand");
    };
    assert_eq!(set_m.get_one::<String>("limit").unwrap(), "-5");
}

#[test]
fn handle_set_zero_removes_budget() {
    let mut app = setup();
    let matches = cli::build_cli().get_matches_from(["smartledger", "budget", "set", "food", "0"]);
    let Some(("budget", b)) = matches.subcommand() else {
        panic!("no budget subcommand");
    };
    let today = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
    budgets::handle(&mut app, b, today, "$").unwrap();
    assert_eq!(app.budgets().limit_for("food"), None);
    assert_eq!(app.budgets().len(), 1);
}

#[test]
fn handle_set_rejects_income_category() {
    let mut app = setup();
    let matches =
        cli::build_cli().get_matches_from(["smartledger", "budget", "set", "salary", "100"]);
    let Some(("budget", b)) = matches.subcommand() else {
        panic!("no budget subcommand");
    };
    let today = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
    assert!(budgets::handle(&mut app, b, today, "$").is_err());
    assert_eq!(app.budgets().limit_for("salary"), None);
}

#[test]
fn handle_set_ignores_unparseable_limit() {
    let mut app = setup();
    let matches =
        cli::build_cli().get_matches_from(["smartledger", "budget", "set", "food", "lots"]);
    let Some(("budget", b)) = matches.subcommand() else {
        panic!("no budget subcommand");
    };
    let today = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
    budgets::handle(&mut app, b, today, "$").unwrap();
    assert_eq!(app.budgets().limit_for("food"), Some(Decimal::new(100, 0)));
}

#[test]
fn status_is_an_alias_for_list() {
    let matches = cli::build_cli().get_matches_from(["smartledger", "budget", "status", "--json"]);
    let Some(("budget", b)) = matches.subcommand() else {
        panic!("no budget subcommand");
    };
    let Some(("list", list_m)) = b.subcommand() else {
        panic!("status did not resolve to list");
    };
    assert!(list_m.get_flag("json"));
}
