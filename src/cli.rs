// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::DB_ENV;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn today_arg() -> Arg {
    Arg::new("today")
        .long("today")
        .value_name("YYYY-MM-DD")
        .help("Reference date for the current month (defaults to today)")
}

pub fn build_cli() -> Command {
    Command::new("spendlens")
        .version(clap::crate_version!())
        .about("Expense tracking with category suggestions, budget status and spending insights")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("SQLite database file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging (RUST_LOG takes precedence)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete expenses")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Omit to use the suggested category"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("month").long("month").value_name("YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Categories and keyword suggestions")
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("suggest")
                        .arg(Arg::new("description").long("description").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budget")
                .subcommand(Command::new("set").arg(Arg::new("amount").long("amount").required(true)))
                .subcommand(Command::new("clear"))
                .subcommand(json_flags(Command::new("status").arg(today_arg()))),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly statistics and insights")
                .subcommand(json_flags(Command::new("summary").arg(today_arg())))
                .subcommand(json_flags(Command::new("breakdown").arg(today_arg())))
                .subcommand(json_flags(Command::new("insights").arg(today_arg()))),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .required(true)
                            .value_parser(["csv", "json"]),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
}
