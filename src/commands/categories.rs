// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::TypeFilter;
use crate::categories;
use crate::utils::pretty_table;
use anyhow::{Result, anyhow};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let filter: TypeFilter = m
        .get_one::<String>("type")
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| anyhow!(e))?
        .unwrap_or_default();
    let data: Vec<Vec<String>> = categories::all()
        .filter(|c| filter.matches(c.kind))
        .map(|c| {
            vec![
                c.id.to_string(),
                c.label.to_string(),
                c.kind.to_string(),
                c.color.to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Label", "Type", "Color"], data));
    Ok(())
}
