// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::aggregate;
use crate::budget::{evaluate, BudgetStatus, Tier};
use crate::commands::reports::month_snapshot;
use crate::ledger;
use crate::utils::{
    fmt_money, fmt_percent, maybe_print_json, parse_decimal, pretty_table, reference_date,
    required_arg,
};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("clear", _)) => {
            if ledger::clear_budget(conn)? {
                println!("Monthly budget cleared");
            } else {
                println!("No budget set");
            }
        }
        Some(("status", sub)) => status(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(required_arg(sub, "amount")?)?;
    let budget = ledger::set_budget(conn, amount)?;
    println!("Monthly budget set to {}", fmt_money(budget.monthly_limit()));
    Ok(())
}

/// One-line verdict shown under the budget figures.
pub fn status_message(status: &BudgetStatus) -> &'static str {
    match status.tier() {
        None => "No budget set",
        Some(Tier::Good) => "You're doing great!",
        Some(Tier::Warning) => "Caution: Over 60% of budget used",
        Some(Tier::Danger) => "Warning: Budget almost exceeded!",
    }
}

pub fn current_status(conn: &Connection, sub: &clap::ArgMatches) -> Result<BudgetStatus> {
    let today = reference_date(sub)?;
    let (month_txs, budget) = month_snapshot(conn, today)?;
    let agg = aggregate(&month_txs, today);
    Ok(evaluate(&agg, budget.as_ref()))
}

fn status(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let st = current_status(conn, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &st)? {
        return Ok(());
    }
    match st.evaluation() {
        None => println!("{}", status_message(&st)),
        Some(e) => {
            let rows = vec![vec![
                fmt_money(e.monthly_limit),
                format!("{} ({}%)", fmt_money(e.spent), fmt_percent(e.percentage_used)),
                fmt_money(e.remaining),
                e.tier.as_str().to_string(),
            ]];
            println!(
                "{}",
                pretty_table(&["Monthly Budget", "Spent", "Remaining", "Status"], rows)
            );
            println!("{}", status_message(&st));
        }
    }
    Ok(())
}
