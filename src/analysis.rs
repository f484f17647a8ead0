// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Narrative analysis requests. Prompt construction is pure; the only
//! non-deterministic step is the `Completer` call.

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::categories;
use crate::error::LedgerResult;
use crate::models::Transaction;

pub const NO_DATA_MESSAGE: &str =
    "No transactions to analyze yet. Add some income or expense records first.";
pub const FAILURE_MESSAGE: &str =
    "Could not reach the AI finance advisor. Check your network connection or API key.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Could not generate an analysis right now.";

/// The external text-completion service.
pub trait Completer {
    fn complete(&self, prompt: &str) -> LedgerResult<String>;
}

impl<F> Completer for F
where
    F: Fn(&str) -> LedgerResult<String>,
{
    fn complete(&self, prompt: &str) -> LedgerResult<String> {
        self(prompt)
    }
}

/// One line per transaction, in store order.
pub fn build_summary(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|t| {
            let category = categories::find(&t.category)
                .map(|c| c.label)
                .unwrap_or(t.category.as_str());
            format!(
                "{}: {} - {} - Amount: {} - Note: {}",
                t.date,
                t.kind.label(),
                category,
                t.amount,
                t.note
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(summary: &str) -> String {
    format!(
        r#"You are a professional personal finance advisor. Analyze the user's transactions below.

Data:
{}

Write a concise report in Markdown that covers:
1. **Spending patterns**: where does the money mostly go, and which expenses look unnecessary?
2. **Income and expense health**: is the user's financial position healthy, and are they saving?
3. **Action items**: 2-3 concrete, practical suggestions for saving or managing money, based on these specific transactions.

Keep the tone encouraging, professional and friendly. Use lists and bold text for readability."#,
        summary
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Requesting,
    Success(String),
    Failure(String),
}

impl AnalysisState {
    pub fn is_requesting(&self) -> bool {
        matches!(self, Self::Requesting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(text) | Self::Failure(text) => Some(text),
            Self::Idle | Self::Requesting => None,
        }
    }
}

/// Runs one analysis without any latency shaping. Never returns an error:
/// failures become a terminal `Failure` state with a fixed message.
pub fn run_analysis<C: Completer + ?Sized>(
    completer: &C,
    transactions: &[Transaction],
) -> AnalysisState {
    if transactions.is_empty() {
        return AnalysisState::Success(NO_DATA_MESSAGE.to_string());
    }
    let prompt = build_prompt(&build_summary(transactions));
    match completer.complete(&prompt) {
        Ok(text) if text.trim().is_empty() => {
            AnalysisState::Failure(EMPTY_RESPONSE_MESSAGE.to_string())
        }
        Ok(text) => AnalysisState::Success(text),
        Err(e) => {
            error!(error = %e, "AI analysis request failed");
            AnalysisState::Failure(FAILURE_MESSAGE.to_string())
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    state: AnalysisState,
    min_latency: Duration,
    last_updated: Option<DateTime<Local>>,
}

impl Analyzer {
    pub fn new(min_latency: Duration) -> Self {
        Self {
            min_latency,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    /// Enters `Requesting`. Returns false when a request is already in
    /// flight; callers must not start a second one.
    pub fn begin(&mut self) -> bool {
        if self.state.is_requesting() {
            return false;
        }
        self.state = AnalysisState::Requesting;
        true
    }

    pub fn finish(&mut self, outcome: AnalysisState) -> &AnalysisState {
        self.state = outcome;
        self.last_updated = Some(Local::now());
        &self.state
    }

    /// Drops any previous result.
    pub fn reset(&mut self) {
        if !self.state.is_requesting() {
            self.state = AnalysisState::Idle;
        }
    }

    /// Runs a full request cycle, holding the result back until at least
    /// `min_latency` has elapsed.
    pub fn request<C: Completer + ?Sized>(
        &mut self,
        completer: &C,
        transactions: &[Transaction],
    ) -> &AnalysisState {
        if !self.begin() {
            return &self.state;
        }
        let started = Instant::now();
        let outcome = run_analysis(completer, transactions);
        let elapsed = started.elapsed();
        if elapsed < self.min_latency {
            std::thread::sleep(self.min_latency - elapsed);
        }
        info!(
            transactions = transactions.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            success = matches!(outcome, AnalysisState::Success(_)),
            "Analysis finished"
        );
        self.finish(outcome)
    }
}
