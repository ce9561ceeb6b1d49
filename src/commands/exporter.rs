// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::utils::{fmt_amount, required_arg};
use anyhow::{bail, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required_arg(sub, "format")?.to_lowercase();
    let out = required_arg(sub, "out")?;

    // Oldest first so the file reads chronologically by entry
    let mut txs = ledger::list_transactions(conn)?;
    txs.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "description",
                "category",
                "amount",
                "created_at",
            ])?;
            for t in &txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.description.clone(),
                    t.category.label().to_string(),
                    fmt_amount(t.amount),
                    t.created_at.to_rfc3339(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    tracing::info!(count = txs.len(), out = %out, "exported transactions");
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
