// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("smartledger")
        .version(crate_version!())
        .about("Personal income/expense tracker with monthly budgets and AI analysis")
        .subcommand(json_flags(
            Command::new("dashboard").about("Totals, category breakdowns and trends"),
        ))
        .subcommand(
            Command::new("view").about("Open one of the views").arg(
                Arg::new("name")
                    .required(true)
                    .value_parser(["dashboard", "transactions", "budgets", "ai-insights"]),
            ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .required(true),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .short('d')
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("note").long("note").short('n')),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_parser(["all", "income", "expense"])
                                .default_value("all"),
                        )
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .short('s')
                                .help("Match against note or category label"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly spending limits per expense category")
                .subcommand(
                    Command::new("set")
                        .about("Set a limit; 0 removes the budget")
                        .arg(Arg::new("category").required(true))
                        .arg(Arg::new("limit").required(true).allow_hyphen_values(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .visible_alias("status")
                        .about("This month's spend against each limit"),
                )),
        )
        .subcommand(Command::new("analyze").about("Ask the AI advisor for a spending analysis"))
        .subcommand(
            Command::new("categories").about("List categories").arg(
                Arg::new("type")
                    .long("type")
                    .short('t')
                    .value_parser(["all", "income", "expense"])
                    .default_value("all"),
            ),
        )
        .subcommand(
            Command::new("settings")
                .about("Display settings")
                .subcommand(
                    Command::new("currency-symbol")
                        .about("Show or set the currency symbol")
                        .arg(Arg::new("symbol")),
                ),
        )
}
