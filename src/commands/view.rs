// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::TypeFilter;
use crate::app::{App, Intent};
use crate::commands::{budgets, dashboard, transactions};
use crate::models::View;
use crate::storage::KeyValueStore;
use crate::utils::arg;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

pub fn handle<S: KeyValueStore>(
    app: &mut App<S>,
    sub: &clap::ArgMatches,
    today: NaiveDate,
    symbol: &str,
) -> Result<()> {
    let view: View = arg(sub, "name")?.parse().map_err(|e: String| anyhow!(e))?;
    show(app, view, today, symbol)
}

pub fn show<S: KeyValueStore>(
    app: &mut App<S>,
    view: View,
    today: NaiveDate,
    symbol: &str,
) -> Result<()> {
    match view {
        View::Dashboard => dashboard::handle(app, None, today, symbol)?,
        View::Transactions => {
            let rows = transactions::rows(app, TypeFilter::All, "", None);
            transactions::render(app.transactions().len(), &rows, "", symbol);
        }
        View::Budgets => {
            let rows = budgets::overview(app, today);
            budgets::render(&rows, today, symbol);
        }
        View::AiInsights => {
            app.dispatch(Intent::Navigate(View::AiInsights));
            println!("AI Insights");
            println!(
                "Personalised spending analysis over your {} transactions.",
                app.transactions().len()
            );
            println!("Run `smartledger analyze` to request a new report.");
        }
    }
    Ok(())
}
