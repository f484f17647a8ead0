// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Snapshot persistence. Loading never fails from the caller's point of
//! view and saving never blocks the in-memory mutation that triggered it;
//! both log what they discard.

use rusqlite::{Connection, OptionalExtension, params};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{error, warn};

use crate::error::LedgerResult;
use crate::models::{Budget, Transaction};

pub const TRANSACTIONS_KEY: &str = "smartledger_transactions_v1";
pub const BUDGETS_KEY: &str = "smartledger_budgets_v1";

pub trait KeyValueStore {
    fn load(&self, key: &str) -> LedgerResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> LedgerResult<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl KeyValueStore for SqliteStore {
    fn load(&self, key: &str) -> LedgerResult<Option<String>> {
        let v = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional()?;
        Ok(v)
    }

    fn save(&self, key: &str, value: &str) -> LedgerResult<()> {
        self.conn.execute(
            "INSERT INTO snapshots(key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn save(&self, key: &str, value: &str) -> LedgerResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn decode_transactions(raw: &str) -> LedgerResult<Vec<Transaction>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn decode_budgets(raw: &str) -> LedgerResult<Vec<Budget>> {
    Ok(serde_json::from_str(raw)?)
}

fn load_slot<T>(
    store: &dyn KeyValueStore,
    key: &str,
    decode: fn(&str) -> LedgerResult<Vec<T>>,
) -> Vec<T> {
    let raw = match store.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "Failed to read snapshot, starting empty");
            return Vec::new();
        }
    };
    decode(&raw).unwrap_or_else(|e| {
        warn!(key, error = %e, "Discarding corrupt snapshot");
        Vec::new()
    })
}

fn save_slot<T: serde::Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T]) {
    let encoded = match serde_json::to_string(items) {
        Ok(s) => s,
        Err(e) => {
            error!(key, error = %e, "Failed to encode snapshot");
            return;
        }
    };
    if let Err(e) = store.save(key, &encoded) {
        error!(key, error = %e, "Failed to save snapshot");
    }
}

pub fn load_transactions(store: &dyn KeyValueStore) -> Vec<Transaction> {
    load_slot(store, TRANSACTIONS_KEY, decode_transactions)
}

pub fn save_transactions(store: &dyn KeyValueStore, transactions: &[Transaction]) {
    save_slot(store, TRANSACTIONS_KEY, transactions)
}

pub fn load_budgets(store: &dyn KeyValueStore) -> Vec<Budget> {
    load_slot(store, BUDGETS_KEY, decode_budgets)
}

pub fn save_budgets(store: &dyn KeyValueStore, budgets: &[Budget]) {
    save_slot(store, BUDGETS_KEY, budgets)
}
