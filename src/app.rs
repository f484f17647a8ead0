// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Session coordinator. State changes go through [`reduce`], which is pure;
//! [`App`] owns the state plus the storage slot and performs the persistence
//! effects the reducer asks for.

use rust_decimal::Decimal;
use std::time::Duration;
use tracing::{debug, info};

use crate::analysis::{AnalysisState, Analyzer, Completer};
use crate::models::{NewTransaction, Transaction, View};
use crate::storage::{self, KeyValueStore};
use crate::store::{BudgetStore, TransactionStore};

/// Action waiting on an explicit yes/no from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteTransaction { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Navigate(View),
    AddTransaction(NewTransaction),
    /// First half of a delete; only `ConfirmDelete` mutates the store.
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    SetBudget { category_id: String, limit: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    PersistTransactions,
    PersistBudgets,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigated(View),
    Added(Transaction),
    DeleteRequested(String),
    Deleted(String),
    DeleteNotFound(String),
    DeleteCancelled,
    BudgetSet { category_id: String, limit: Decimal },
    BudgetRemoved(String),
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub view: View,
    pub transactions: TransactionStore,
    pub budgets: BudgetStore,
    pub pending: Option<PendingAction>,
}

pub fn reduce(mut state: AppState, intent: Intent) -> (AppState, Event, Vec<Effect>) {
    match intent {
        Intent::Navigate(view) => {
            state.view = view;
            (state, Event::Navigated(view), vec![])
        }
        Intent::AddTransaction(candidate) => {
            let tx = state.transactions.add(candidate);
            (state, Event::Added(tx), vec![Effect::PersistTransactions])
        }
        Intent::RequestDelete(id) => {
            state.pending = Some(PendingAction::DeleteTransaction { id: id.clone() });
            (state, Event::DeleteRequested(id), vec![])
        }
        Intent::ConfirmDelete => match state.pending.take() {
            Some(PendingAction::DeleteTransaction { id }) => {
                if state.transactions.remove(&id) {
                    (state, Event::Deleted(id), vec![Effect::PersistTransactions])
                } else {
                    (state, Event::DeleteNotFound(id), vec![])
                }
            }
            None => (state, Event::Ignored, vec![]),
        },
        Intent::CancelDelete => {
            let event = if state.pending.take().is_some() {
                Event::DeleteCancelled
            } else {
                Event::Ignored
            };
            (state, event, vec![])
        }
        Intent::SetBudget { category_id, limit } => {
            state.budgets.set_limit(&category_id, limit);
            let event = if limit > Decimal::ZERO {
                Event::BudgetSet { category_id, limit }
            } else {
                Event::BudgetRemoved(category_id)
            };
            (state, event, vec![Effect::PersistBudgets])
        }
    }
}

pub struct App<S: KeyValueStore> {
    state: AppState,
    store: S,
    analyzer: Analyzer,
}

impl<S: KeyValueStore> App<S> {
    /// Restores both stores from `store`; missing or corrupt slots start empty.
    pub fn load(store: S, min_analysis_latency: Duration) -> Self {
        let transactions = TransactionStore::from_vec(storage::load_transactions(&store));
        let budgets = BudgetStore::from_vec(storage::load_budgets(&store));
        debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "Session loaded"
        );
        Self {
            state: AppState {
                transactions,
                budgets,
                ..AppState::default()
            },
            store,
            analyzer: Analyzer::new(min_analysis_latency),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.state.transactions.all()
    }

    pub fn budgets(&self) -> &BudgetStore {
        &self.state.budgets
    }

    pub fn storage(&self) -> &S {
        &self.store
    }

    pub fn analysis(&self) -> &AnalysisState {
        self.analyzer.state()
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn dispatch(&mut self, intent: Intent) -> Event {
        let (state, event, effects) = reduce(std::mem::take(&mut self.state), intent);
        self.state = state;
        for effect in effects {
            self.run(effect);
        }
        event
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::PersistTransactions => {
                storage::save_transactions(&self.store, self.state.transactions.all())
            }
            Effect::PersistBudgets => storage::save_budgets(&self.store, self.state.budgets.all()),
        }
    }

    /// Switches to the insights view and runs one analysis over the current
    /// transactions. A request already in flight is left alone.
    pub fn request_analysis<C: Completer + ?Sized>(&mut self, completer: &C) -> &AnalysisState {
        self.state.view = View::AiInsights;
        info!(transactions = self.state.transactions.len(), "Requesting analysis");
        self.analyzer
            .request(completer, self.state.transactions.all())
    }
}
