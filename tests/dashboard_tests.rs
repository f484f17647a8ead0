// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use smartledger::commands::dashboard::Dashboard;
use smartledger::models::{Transaction, TransactionType};

fn tx(id: &str, kind: TransactionType, amount: i64, category: &str, day: u32) -> Transaction {
    Transaction {
        id: id.into(),
        amount: Decimal::new(amount, 0),
        kind,
        category: category.into(),
        date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
        note: String::new(),
    }
}

#[test]
fn dashboard_snapshot() {
    let txs = vec![
        tx("1", TransactionType::Income, 1000, "salary", 1),
        tx("2", TransactionType::Expense, 200, "housing", 2),
        tx("3", TransactionType::Expense, 30, "legacy", 9),
    ];
    let dash = Dashboard::compute(&txs, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
    assert_eq!(dash.totals.balance, Decimal::new(770, 0));
    assert_eq!(dash.expense_by_category.len(), 1);
    assert_eq!(dash.uncategorized_expense, Decimal::new(30, 0));
    assert_eq!(dash.uncategorized_income, Decimal::ZERO);
    assert_eq!(dash.last_seven_days.len(), 7);
    assert_eq!(dash.last_seven_days[5].expense, Decimal::new(30, 0));
    assert_eq!(dash.net_worth_trend.len(), 3);
    assert_eq!(dash.net_worth_trend[2].net_worth, Decimal::new(770, 0));

    let v = serde_json::to_value(&dash).unwrap();
    assert_eq!(v["income_by_category"][0]["category_id"], "salary");
}
