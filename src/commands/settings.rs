// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{get_currency_symbol, set_currency_symbol};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("currency-symbol", sub)) = m.subcommand() {
        match sub.get_one::<String>("symbol") {
            Some(symbol) => {
                set_currency_symbol(conn, symbol.trim())?;
                println!("Currency symbol set to {}", symbol.trim());
            }
            None => println!("{}", get_currency_symbol(conn)?),
        }
    }
    Ok(())
}
