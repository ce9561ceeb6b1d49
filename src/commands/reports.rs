// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{aggregate, CategoryShare};
use crate::insights::{generate_insights, Insight};
use crate::ledger;
use crate::models::{Budget, Transaction};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table, reference_date};
use crate::window::{current_month, MonthWindow};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("breakdown", sub)) => breakdown(conn, sub)?,
        Some(("insights", sub)) => insights(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Transactions in the month of `reference` plus the configured budget.
pub fn month_snapshot(
    conn: &Connection,
    reference: NaiveDate,
) -> Result<(Vec<Transaction>, Option<Budget>)> {
    let all = ledger::list_transactions(conn)?;
    let budget = ledger::get_budget(conn)?;
    Ok((current_month(&all, reference), budget))
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub month: String,
    pub total_spent: Decimal,
    pub transaction_count: usize,
    pub average_daily: Decimal,
    pub top_category: String,
}

pub fn build_summary(conn: &Connection, reference: NaiveDate) -> Result<Summary> {
    let (month_txs, _) = month_snapshot(conn, reference)?;
    let agg = aggregate(&month_txs, reference);
    Ok(Summary {
        month: MonthWindow::containing(reference).to_string(),
        total_spent: agg.total_spent,
        transaction_count: agg.transaction_count,
        average_daily: agg.average_daily,
        top_category: agg.top_category_label().to_string(),
    })
}

pub fn build_breakdown(conn: &Connection, reference: NaiveDate) -> Result<Vec<CategoryShare>> {
    let (month_txs, _) = month_snapshot(conn, reference)?;
    Ok(aggregate(&month_txs, reference).breakdown())
}

pub fn build_insights(conn: &Connection, reference: NaiveDate) -> Result<Vec<Insight>> {
    let (month_txs, budget) = month_snapshot(conn, reference)?;
    Ok(generate_insights(&month_txs, budget.as_ref(), reference))
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let s = build_summary(conn, reference_date(sub)?)?;
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![vec![
            s.month.clone(),
            fmt_money(s.total_spent),
            fmt_money(s.average_daily),
            s.transaction_count.to_string(),
            s.top_category.clone(),
        ]];
        println!(
            "{}",
            pretty_table(
                &["Month", "Total Spent", "Avg Daily", "Expenses", "Top Category"],
                rows
            )
        );
    }
    Ok(())
}

fn breakdown(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let items = build_breakdown(conn, reference_date(sub)?)?;
    if maybe_print_json(json_flag, jsonl_flag, &items)? {
        return Ok(());
    }
    if items.is_empty() {
        println!("No expenses this month");
        return Ok(());
    }
    let rows = items
        .iter()
        .map(|i| {
            vec![
                i.category.label().to_string(),
                fmt_money(i.total),
                format!("{}%", fmt_percent(i.percentage)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    Ok(())
}

fn insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let items = build_insights(conn, reference_date(sub)?)?;
    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        for i in &items {
            println!("{} {}", i.kind.icon(), i.title);
            println!("   {}", i.description);
        }
    }
    Ok(())
}
