// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ai_client::AiClient;
use crate::analysis::AnalysisState;
use crate::app::App;
use crate::config::AiSettings;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::KeyValueStore;
use anyhow::Result;
use tracing::error;

/// `settings` is the resolved AI configuration; an invalid one is reported
/// as a failed analysis rather than aborting the command.
pub fn handle<S: KeyValueStore>(
    app: &mut App<S>,
    settings: &LedgerResult<AiSettings>,
) -> Result<()> {
    let client = match settings {
        Ok(settings) => {
            eprintln!(
                "Analyzing {} transactions with {} ({})...",
                app.transactions().len(),
                settings.provider.as_str(),
                settings.model
            );
            AiClient::new(settings.clone())
        }
        Err(e) => Err(LedgerError::Config(e.to_string())),
    };

    let state = match client {
        Ok(client) => app.request_analysis(&client),
        Err(e) => {
            // Unusable client settings take the same path as a failed call.
            error!(error = %e, "AI client unavailable");
            let reason = e.to_string();
            let unavailable =
                move |_: &str| -> LedgerResult<String> { Err(LedgerError::Config(reason.clone())) };
            app.request_analysis(&unavailable)
        }
    }
    .clone();

    match &state {
        AnalysisState::Success(text) => println!("{}", text),
        AnalysisState::Failure(message) => eprintln!("{}", message),
        AnalysisState::Idle | AnalysisState::Requesting => {}
    }
    if let Some(at) = app.analyzer().last_updated() {
        eprintln!("Last updated {}", at.format("%H:%M:%S"));
    }
    Ok(())
}
