// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed category registry. Order here is the display order used by every
//! category-keyed aggregate.

use crate::models::{Category, TransactionType};

pub const UNKNOWN_CATEGORY_LABEL: &str = "Unknown category";

const fn expense(id: &'static str, label: &'static str, color: &'static str) -> Category {
    Category {
        id,
        label,
        kind: TransactionType::Expense,
        color,
    }
}

const fn income(id: &'static str, label: &'static str, color: &'static str) -> Category {
    Category {
        id,
        label,
        kind: TransactionType::Income,
        color,
    }
}

pub const EXPENSE_CATEGORIES: &[Category] = &[
    expense("food", "Food & Dining", "#ef4444"),
    expense("transport", "Transport", "#f97316"),
    expense("shopping", "Shopping", "#eab308"),
    expense("housing", "Housing & Utilities", "#84cc16"),
    expense("entertainment", "Entertainment", "#06b6d4"),
    expense("health", "Health & Medical", "#8b5cf6"),
    expense("other_expense", "Other Expense", "#64748b"),
];

pub const INCOME_CATEGORIES: &[Category] = &[
    income("salary", "Salary", "#10b981"),
    income("investment", "Investments", "#3b82f6"),
    income("gift", "Gifts", "#a855f7"),
    income("other_income", "Other Income", "#6366f1"),
];

pub fn for_type(kind: TransactionType) -> &'static [Category] {
    match kind {
        TransactionType::Expense => EXPENSE_CATEGORIES,
        TransactionType::Income => INCOME_CATEGORIES,
    }
}

pub fn all() -> impl Iterator<Item = &'static Category> {
    EXPENSE_CATEGORIES.iter().chain(INCOME_CATEGORIES.iter())
}

pub fn find(id: &str) -> Option<&'static Category> {
    all().find(|c| c.id == id)
}

/// Looks `id` up among the categories of one type only.
pub fn find_for_type(kind: TransactionType, id: &str) -> Option<&'static Category> {
    for_type(kind).iter().find(|c| c.id == id)
}

pub fn label(id: &str) -> &'static str {
    find(id).map(|c| c.label).unwrap_or(UNKNOWN_CATEGORY_LABEL)
}
