// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::classifier::suggest;
use crate::ledger;
use crate::models::NewTransaction;
use crate::utils::{
    fmt_amount, fmt_money, maybe_print_json, parse_category, parse_date, parse_decimal, parse_month,
    pretty_table, required_arg,
};
use anyhow::{bail, Result};
use chrono::Utc;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(required_arg(sub, "amount")?)?;
    let description = required_arg(sub, "description")?.trim().to_string();
    let category = match sub.get_one::<String>("category") {
        Some(c) => Some(parse_category(c)?),
        None => None,
    };
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };

    if category.is_none() {
        if let Some(s) = suggest(&description) {
            println!("Suggested category: {}", s);
        }
    }

    let tx = ledger::add_transaction(
        conn,
        NewTransaction {
            amount,
            description,
            category,
            date,
        },
        Utc::now(),
    )?;
    println!(
        "Recorded {} on {} for '{}' ({}) [id {}]",
        fmt_money(tx.amount),
        tx.date,
        tx.description,
        tx.category,
        tx.id
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let Some(id) = sub.get_one::<i64>("id").copied() else {
        bail!("Missing required argument '--id'");
    };
    if ledger::delete_transaction(conn, id)? {
        println!("Removed transaction {}", id);
    } else {
        bail!("Transaction {} not found", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

/// Entries shown by a bare `tx list`.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Stored transactions, newest first, narrowed by `--month`, `--category`
/// and `--limit`. With none of them given, only the latest
/// `DEFAULT_LIST_LIMIT` entries are returned.
pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = match sub.get_one::<String>("month") {
        Some(s) => Some(parse_month(s)?),
        None => None,
    };
    let category = match sub.get_one::<String>("category") {
        Some(s) => Some(parse_category(s)?),
        None => None,
    };
    let limit = sub.get_one::<usize>("limit").copied();

    let txs = if month.is_none() && category.is_none() && limit.is_none() {
        ledger::recent_transactions(conn, DEFAULT_LIST_LIMIT)?
    } else {
        ledger::list_transactions(conn)?
    };

    let data = txs
        .into_iter()
        .filter(|t| month.is_none_or(|m| m.contains(t.date)))
        .filter(|t| category.is_none_or(|c| c == t.category))
        .take(limit.unwrap_or(usize::MAX))
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            description: t.description,
            category: t.category.label().to_string(),
            amount: fmt_amount(t.amount),
        })
        .collect();
    Ok(data)
}
