// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Input boundary. Nothing reaches the stores without passing through here.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::categories;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewTransaction, TransactionType};
use crate::utils::{parse_date, parse_decimal};

/// Largest accepted amount or budget limit (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);
/// Money is entered to the cent.
pub const MAX_DECIMAL_PLACES: u32 = 2;

/// Checks that a parsed amount is within range and precision. Zero is allowed
/// here; callers decide whether it means anything.
fn check_money(value: Decimal) -> Result<Decimal, String> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("must not be negative, got {}", value));
    }
    if value > MAX_AMOUNT {
        return Err(format!("must be at most {}, got {}", MAX_AMOUNT, value));
    }
    if value.normalize().scale() > MAX_DECIMAL_PLACES {
        return Err(format!(
            "must have at most {} decimal places, got {}",
            MAX_DECIMAL_PLACES, value
        ));
    }
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub kind: TransactionType,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub note: String,
}

impl TransactionForm {
    pub fn validate(&self) -> LedgerResult<NewTransaction> {
        let amount_raw = self.amount.trim();
        if amount_raw.is_empty() {
            return Err(LedgerError::Validation("Amount is required".into()));
        }
        let amount = parse_decimal(amount_raw)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "Amount must be positive, got {}",
                amount
            )));
        }
        let amount = check_money(amount)
            .map_err(|e| LedgerError::Validation(format!("Amount {}", e)))?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err(LedgerError::Validation("Category is required".into()));
        }
        if categories::find_for_type(self.kind, category).is_none() {
            let valid: Vec<&str> = categories::for_type(self.kind)
                .iter()
                .map(|c| c.id)
                .collect();
            return Err(LedgerError::Validation(format!(
                "'{}' is not a {} category (choose one of: {})",
                category,
                self.kind,
                valid.join(", ")
            )));
        }

        let date_raw = self.date.trim();
        if date_raw.is_empty() {
            return Err(LedgerError::Validation("Date is required".into()));
        }
        let date: NaiveDate =
            parse_date(date_raw).map_err(|e| LedgerError::Validation(e.to_string()))?;

        Ok(NewTransaction {
            amount,
            kind: self.kind,
            category: category.to_string(),
            date,
            note: self.note.trim().to_string(),
        })
    }
}

/// Parses an inline budget edit. `None` means the edit is discarded without
/// touching the store; `Some(0)` deletes the budget.
pub fn parse_budget_limit(input: &str) -> Option<Decimal> {
    match parse_decimal(input.trim()) {
        Ok(limit) => match check_money(limit) {
            Ok(limit) => Some(limit),
            Err(e) => {
                tracing::debug!(%limit, reason = %e, "Ignoring budget limit");
                None
            }
        },
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unparseable budget limit");
            None
        }
    }
}
