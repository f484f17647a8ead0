// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over a transaction snapshot. Every function here is pure:
//! the current date is always passed in, never read from the clock.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::categories;
use crate::models::{Budget, Transaction, TransactionType};

/// Share of the limit at which a budget is flagged as close to its cap.
pub const NEAR_LIMIT_PERCENT: Decimal = Decimal::from_parts(80, 0, 0, false, 0);
pub const DAILY_WINDOW_DAYS: u32 = 7;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Addition clamped to `Decimal::MIN..=Decimal::MAX`.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Sum that saturates instead of panicking on overflow.
pub fn saturating_sum<I: IntoIterator<Item = Decimal>>(values: I) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, saturating_add)
}

pub fn total_by_type(transactions: &[Transaction], kind: TransactionType) -> Decimal {
    saturating_sum(
        transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount),
    )
}

pub fn balance(transactions: &[Transaction]) -> Decimal {
    saturating_add(
        total_by_type(transactions, TransactionType::Income),
        -total_by_type(transactions, TransactionType::Expense),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let income = total_by_type(transactions, TransactionType::Income);
    let expense = total_by_type(transactions, TransactionType::Expense);
    Totals {
        income,
        expense,
        balance: saturating_add(income, -expense),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category_id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub value: Decimal,
}

/// Per-category sums for one type, in registry order. Categories with a
/// zero sum are left out, as are transactions whose category is not a
/// registry entry of that type (see [`uncategorized_total`]).
pub fn category_breakdown(transactions: &[Transaction], kind: TransactionType) -> Vec<CategoryTotal> {
    categories::for_type(kind)
        .iter()
        .filter_map(|cat| {
            let value = saturating_sum(
                transactions
                    .iter()
                    .filter(|t| t.kind == kind && t.category == cat.id)
                    .map(|t| t.amount),
            );
            (!value.is_zero()).then_some(CategoryTotal {
                category_id: cat.id,
                label: cat.label,
                color: cat.color,
                value,
            })
        })
        .collect()
}

/// Sum of the transactions of `kind` that no breakdown bucket accounts for.
pub fn uncategorized_total(transactions: &[Transaction], kind: TransactionType) -> Decimal {
    saturating_sum(
        transactions
            .iter()
            .filter(|t| t.kind == kind && categories::find_for_type(kind, &t.category).is_none())
            .map(|t| t.amount),
    )
}

pub fn is_same_month(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Expense total for `category_id` within the calendar month containing `today`.
pub fn monthly_spend(transactions: &[Transaction], category_id: &str, today: NaiveDate) -> Decimal {
    saturating_sum(
        transactions
            .iter()
            .filter(|t| {
                t.kind == TransactionType::Expense
                    && t.category == category_id
                    && is_same_month(t.date, today)
            })
            .map(|t| t.amount),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetStatus {
    pub spent: Decimal,
    pub limit: Decimal,
    pub percentage: Decimal,
    pub over_budget: bool,
    pub near_limit: bool,
}

impl BudgetStatus {
    /// Progress bar fill, capped at 100.
    pub fn fill_percentage(&self) -> Decimal {
        self.percentage.min(HUNDRED)
    }

    /// Signed difference `spent - limit`; positive when over budget.
    pub fn overage(&self) -> Decimal {
        saturating_add(self.spent, -self.limit)
    }

    pub fn remaining(&self) -> Decimal {
        saturating_add(self.limit, -self.spent).max(Decimal::ZERO)
    }
}

/// Status for a configured limit. Returns `None` when `limit <= 0`, which
/// cannot come out of a `BudgetStore`.
pub fn budget_status(spent: Decimal, limit: Decimal) -> Option<BudgetStatus> {
    if limit <= Decimal::ZERO {
        return None;
    }
    // A ratio too large to represent reads as maximally over budget.
    let percentage = spent
        .checked_div(limit)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::MAX);
    let over_budget = spent > limit;
    Some(BudgetStatus {
        spent,
        limit,
        percentage,
        over_budget,
        near_limit: !over_budget && percentage >= NEAR_LIMIT_PERCENT,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetRow {
    pub category_id: &'static str,
    pub label: &'static str,
    pub spent: Decimal,
    pub status: Option<BudgetStatus>,
}

/// One row per expense category with this month's spend and, where a limit
/// is configured, its status.
pub fn budget_overview(
    transactions: &[Transaction],
    budgets: &[Budget],
    today: NaiveDate,
) -> Vec<BudgetRow> {
    categories::EXPENSE_CATEGORIES
        .iter()
        .map(|cat| {
            let spent = monthly_spend(transactions, cat.id, today);
            let status = budgets
                .iter()
                .find(|b| b.category_id == cat.id)
                .and_then(|b| budget_status(spent, b.limit));
            BudgetRow {
                category_id: cat.id,
                label: cat.label,
                spent,
                status,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// One bucket per day for the `days`-long window ending at `today`
/// inclusive, oldest first. Empty days are kept with zero sums.
pub fn daily_rollup(transactions: &[Transaction], today: NaiveDate, days: u32) -> Vec<DailyTotals> {
    (0..days)
        .rev()
        .map(|back| {
            let date = today - chrono::Duration::days(back as i64);
            let mut bucket = DailyTotals {
                date,
                income: Decimal::ZERO,
                expense: Decimal::ZERO,
            };
            for t in transactions.iter().filter(|t| t.date == date) {
                match t.kind {
                    TransactionType::Income => {
                        bucket.income = saturating_add(bucket.income, t.amount)
                    }
                    TransactionType::Expense => {
                        bucket.expense = saturating_add(bucket.expense, t.amount)
                    }
                }
            }
            bucket
        })
        .collect()
}

pub fn last_seven_days(transactions: &[Transaction], today: NaiveDate) -> Vec<DailyTotals> {
    daily_rollup(transactions, today, DAILY_WINDOW_DAYS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub net_worth: Decimal,
}

/// Running balance over the dates that carry at least one transaction.
/// Same-day transactions collapse into a single point; no zero-fill.
pub fn net_worth_trend(transactions: &[Transaction]) -> Vec<TrendPoint> {
    let mut daily_net: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for t in transactions {
        let net = daily_net.entry(t.date).or_insert(Decimal::ZERO);
        *net = saturating_add(*net, t.kind.signed(t.amount));
    }

    let mut running = Decimal::ZERO;
    daily_net
        .into_iter()
        .map(|(date, net)| {
            running = saturating_add(running, net);
            TrendPoint {
                date,
                net_worth: running,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

impl TypeFilter {
    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Self::All => true,
            Self::Only(k) => *k == kind,
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TransactionType>().map(Self::Only)
    }
}

/// Newest first. Ties keep store order, so the most recently added
/// transaction of a day leads.
pub fn sorted_for_display(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut out: Vec<&Transaction> = transactions.iter().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// List-view filter: type first, then a case-insensitive substring match on
/// the note or the category label. A blank query matches everything.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: TypeFilter,
    query: &str,
) -> Vec<&'a Transaction> {
    let needle = query.trim().to_lowercase();
    sorted_for_display(transactions)
        .into_iter()
        .filter(|t| filter.matches(t.kind))
        .filter(|t| {
            if needle.is_empty() {
                return true;
            }
            let label = categories::find(&t.category)
                .map(|c| c.label)
                .unwrap_or_default();
            t.note.to_lowercase().contains(&needle) || label.to_lowercase().contains(&needle)
        })
        .collect()
}
