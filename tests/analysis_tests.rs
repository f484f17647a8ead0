// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use smartledger::analysis::{
    AnalysisState, Analyzer, EMPTY_RESPONSE_MESSAGE, FAILURE_MESSAGE, NO_DATA_MESSAGE,
    build_prompt, build_summary, run_analysis,
};
use smartledger::error::{LedgerError, LedgerResult};
use smartledger::models::{Transaction, TransactionType};
use std::cell::Cell;
use std::time::{Duration, Instant};

fn sample() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".into(),
            amount: "12.5".parse().unwrap(),
            kind: TransactionType::Expense,
            category: "food".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            note: "lunch".into(),
        },
        Transaction {
            id: "2".into(),
            amount: "3000".parse().unwrap(),
            kind: TransactionType::Income,
            category: "bonus_pool".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            note: String::new(),
        },
    ]
}

#[test]
fn summary_has_one_line_per_transaction() {
    let summary = build_summary(&sample());
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2025-01-02: Expense - Food & Dining - Amount: 12.5 - Note: lunch",
            "2025-01-01: Income - bonus_pool - Amount: 3000 - Note: ",
        ]
    );
}

#[test]
fn prompt_embeds_summary_and_sections() {
    let prompt = build_prompt("LINE-A\nLINE-B");
    assert!(prompt.contains("LINE-A\nLINE-B"));
    assert!(prompt.contains("Spending patterns"));
    assert!(prompt.contains("Income and expense health"));
    assert!(prompt.contains("Action items"));
    assert!(prompt.contains("Markdown"));
}

#[test]
fn empty_input_never_calls_completer() {
    let completer = |_: &str| -> LedgerResult<String> { panic!("completer must not be called") };
    let state = run_analysis(&completer, &[]);
    assert_eq!(state, AnalysisState::Success(NO_DATA_MESSAGE.into()));
}

#[test]
fn completer_error_maps_to_fixed_failure() {
    let completer = |_: &str| -> LedgerResult<String> {
        Err(LedgerError::Provider("quota exceeded".into()))
    };
    let state = run_analysis(&completer, &sample());
    assert_eq!(state, AnalysisState::Failure(FAILURE_MESSAGE.into()));
}

#[test]
fn blank_response_is_a_failure() {
    let completer = |_: &str| -> LedgerResult<String> { Ok("  \n".into()) };
    let state = run_analysis(&completer, &sample());
    assert_eq!(state, AnalysisState::Failure(EMPTY_RESPONSE_MESSAGE.into()));
}

#[test]
fn completer_receives_built_prompt() {
    let seen = Cell::new(false);
    let completer = |prompt: &str| -> LedgerResult<String> {
        assert!(prompt.contains("Food & Dining - Amount: 12.5"));
        seen.set(true);
        Ok("**Eat out less.**".into())
    };
    let state = run_analysis(&completer, &sample());
    assert!(seen.get());
    assert_eq!(state.message(), Some("**Eat out less.**"));
}

#[test]
fn begin_refuses_overlapping_request() {
    let mut analyzer = Analyzer::new(Duration::ZERO);
    assert!(analyzer.begin());
    assert!(analyzer.state().is_requesting());
    assert!(!analyzer.begin());

    let completer = |_: &str| -> LedgerResult<String> { panic!("no second request") };
    assert!(analyzer.request(&completer, &sample()).is_requesting());
    assert!(analyzer.last_updated().is_none());

    analyzer.finish(AnalysisState::Success("done".into()));
    assert!(analyzer.last_updated().is_some());
    analyzer.reset();
    assert_eq!(analyzer.state(), &AnalysisState::Idle);
}

#[test]
fn request_waits_out_minimum_latency() {
    let mut analyzer = Analyzer::new(Duration::from_millis(50));
    let completer = |_: &str| -> LedgerResult<String> { Ok("fine".into()) };
    let started = Instant::now();
    let state = analyzer.request(&completer, &sample()).clone();
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(state, AnalysisState::Success("fine".into()));

    // the floor also applies when there is nothing to analyze
    let started = Instant::now();
    analyzer.request(&completer, &[]);
    assert!(started.elapsed() >= Duration::from_millis(50));
}
