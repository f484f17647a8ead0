// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Budget, NewTransaction, Transaction};

/// Transaction log in insertion order. Chronological ordering is a
/// read-time concern (see `aggregate::sorted_for_display`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    items: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<Transaction>) -> Self {
        Self { items }
    }

    /// Assigns a fresh random id and prepends the transaction.
    pub fn add(&mut self, candidate: NewTransaction) -> Transaction {
        let tx = candidate.with_id(Uuid::new_v4().to_string());
        debug!(id = %tx.id, kind = %tx.kind, amount = %tx.amount, "Adding transaction");
        self.items.insert(0, tx.clone());
        tx
    }

    /// Removes the transaction with `id`. Returns whether anything was removed;
    /// an unknown id leaves the store untouched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        let removed = self.items.len() != before;
        if !removed {
            debug!(id, "Remove ignored, no such transaction");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// At most one limit per category. A non-positive limit deletes the entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetStore {
    items: Vec<Budget>,
}

impl BudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a persisted snapshot, keeping the last entry for
    /// a duplicated category and dropping non-positive limits.
    pub fn from_vec(items: Vec<Budget>) -> Self {
        let mut store = Self::new();
        for b in items {
            store.set_limit(&b.category_id, b.limit);
        }
        store
    }

    pub fn set_limit(&mut self, category_id: &str, limit: Decimal) {
        if limit <= Decimal::ZERO {
            self.items.retain(|b| b.category_id != category_id);
            debug!(category_id, "Budget removed");
            return;
        }
        match self.items.iter_mut().find(|b| b.category_id == category_id) {
            Some(existing) => existing.limit = limit,
            None => self.items.push(Budget {
                category_id: category_id.to_string(),
                limit,
            }),
        }
        debug!(category_id, %limit, "Budget set");
    }

    pub fn limit_for(&self, category_id: &str) -> Option<Decimal> {
        self.items
            .iter()
            .find(|b| b.category_id == category_id)
            .map(|b| b.limit)
    }

    pub fn all(&self) -> &[Budget] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
