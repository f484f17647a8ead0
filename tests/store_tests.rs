// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use smartledger::models::{Budget, NewTransaction, TransactionType};
use smartledger::store::{BudgetStore, TransactionStore};

fn candidate(amount: &str, note: &str) -> NewTransaction {
    NewTransaction {
        amount: amount.parse().unwrap(),
        kind: TransactionType::Expense,
        category: "food".into(),
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        note: note.into(),
    }
}

#[test]
fn add_prepends_with_unique_ids() {
    let mut store = TransactionStore::new();
    let first = store.add(candidate("10", "first"));
    let second = store.add(candidate("10", "second"));
    assert_ne!(first.id, second.id);
    assert!(!first.id.is_empty());
    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].note, "second");
    assert_eq!(store.get(&first.id).unwrap().note, "first");
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut store = TransactionStore::new();
    let kept = store.add(candidate("5", ""));
    let before = store.clone();
    assert!(!store.remove("does-not-exist"));
    assert_eq!(store, before);
    assert!(store.remove(&kept.id));
    assert!(store.is_empty());
}

#[test]
fn set_limit_upserts_one_entry_per_category() {
    let mut budgets = BudgetStore::new();
    budgets.set_limit("food", Decimal::new(200, 0));
    budgets.set_limit("food", Decimal::new(250, 0));
    budgets.set_limit("transport", Decimal::new(80, 0));
    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets.limit_for("food"), Some(Decimal::new(250, 0)));
}

#[test]
fn zero_or_negative_limit_removes() {
    let mut budgets = BudgetStore::new();
    budgets.set_limit("food", Decimal::new(200, 0));
    budgets.set_limit("health", Decimal::new(50, 0));
    budgets.set_limit("food", Decimal::ZERO);
    assert_eq!(budgets.limit_for("food"), None);
    budgets.set_limit("health", Decimal::new(-1, 0));
    assert!(budgets.is_empty());
    // removing an absent entry changes nothing
    budgets.set_limit("shopping", Decimal::ZERO);
    assert!(budgets.is_empty());
}

#[test]
fn from_vec_normalizes_snapshot() {
    let budgets = BudgetStore::from_vec(vec![
        Budget {
            category_id: "food".into(),
            limit: Decimal::new(100, 0),
        },
        Budget {
            category_id: "transport".into(),
            limit: Decimal::ZERO,
        },
        Budget {
            category_id: "food".into(),
            limit: Decimal::new(150, 0),
        },
    ]);
    assert_eq!(budgets.len(), 1);
    assert_eq!(budgets.limit_for("food"), Some(Decimal::new(150, 0)));
}
