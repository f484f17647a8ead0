// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use smartledger::app::App;
use smartledger::config::Config;
use smartledger::storage::SqliteStore;
use smartledger::{cli, commands, db, utils};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartledger=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let matches = cli::build_cli().get_matches();

    let conn = match &config.database_path {
        Some(path) => db::open_at(path)?,
        None => db::open_or_init()?,
    };
    let symbol = utils::get_currency_symbol(&conn)?;
    let today = Local::now().date_naive();
    let mut app = App::load(SqliteStore::new(conn), config.min_analysis_latency);

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&mut app, Some(sub), today, &symbol)?,
        Some(("view", sub)) => commands::view::handle(&mut app, sub, today, &symbol)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut app, sub, today, &symbol)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut app, sub, today, &symbol)?,
        Some(("analyze", _)) => commands::analyze::handle(&mut app, &config.ai)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("settings", sub)) => {
            commands::settings::handle(app.storage().connection(), sub)?
        }
        _ => {
            let view = app.view();
            commands::view::show(&mut app, view, today, &symbol)?
        }
    }
    Ok(())
}
