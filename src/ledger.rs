// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! SQLite backed transaction list and budget setting.

use crate::classifier::suggest;
use crate::models::{Budget, Category, NewTransaction, Transaction};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

const BUDGET_KEY: &str = "monthly_budget";

const SELECT_TRANSACTIONS: &str =
    "SELECT id, amount, description, category, date, created_at FROM transactions";

/// Store a new transaction. An empty category selection is filled from the
/// classifier, falling back to `Uncategorized`.
pub fn add_transaction(
    conn: &Connection,
    new: NewTransaction,
    created_at: DateTime<Utc>,
) -> Result<Transaction> {
    let category = new
        .category
        .or_else(|| suggest(&new.description))
        .unwrap_or(Category::Uncategorized);
    // Validate before touching the table; the id is patched in after insert.
    let draft = Transaction::new(0, new.amount, new.description, category, new.date, created_at)?;

    conn.execute(
        "INSERT INTO transactions(amount, description, category, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            draft.amount.to_string(),
            draft.description,
            draft.category.label(),
            draft.date.to_string(),
            draft.created_at.to_rfc3339(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, amount = %draft.amount, category = %draft.category, "recorded transaction");
    Ok(Transaction { id, ..draft })
}

/// All transactions, most recently added first.
pub fn list_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY id DESC", SELECT_TRANSACTIONS))?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(row_to_transaction(r)?);
    }
    Ok(out)
}

pub fn recent_transactions(conn: &Connection, limit: usize) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY id DESC LIMIT ?1", SELECT_TRANSACTIONS))?;
    let mut rows = stmt.query(params![limit as i64])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        out.push(row_to_transaction(r)?);
    }
    Ok(out)
}

/// Remove exactly the record with `id`. Returns false when none matched.
pub fn delete_transaction(conn: &Connection, id: i64) -> Result<bool> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if n > 0 {
        tracing::info!(id, "deleted transaction");
    } else {
        tracing::warn!(id, "no transaction to delete");
    }
    Ok(n > 0)
}

fn row_to_transaction(r: &Row<'_>) -> Result<Transaction> {
    let id: i64 = r.get(0)?;
    let amount_s: String = r.get(1)?;
    let description: String = r.get(2)?;
    let category_s: String = r.get(3)?;
    let date_s: String = r.get(4)?;
    let created_s: String = r.get(5)?;

    let amount = amount_s
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}' in transaction {}", amount_s, id))?;
    let category = category_s
        .parse::<Category>()
        .with_context(|| format!("Invalid category in transaction {}", id))?;
    let date = NaiveDate::parse_from_str(&date_s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' in transaction {}", date_s, id))?;
    let created_at = DateTime::parse_from_rfc3339(&created_s)
        .with_context(|| format!("Invalid timestamp '{}' in transaction {}", created_s, id))?
        .with_timezone(&Utc);

    Ok(Transaction {
        id,
        amount,
        description,
        category,
        date,
        created_at,
    })
}

/// The configured monthly budget, if any.
pub fn get_budget(conn: &Connection) -> Result<Option<Budget>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![BUDGET_KEY],
            |r| r.get(0),
        )
        .optional()?;
    match v {
        None => Ok(None),
        Some(s) => {
            let limit = s
                .parse::<Decimal>()
                .with_context(|| format!("Invalid stored budget '{}'", s))?;
            Ok(Some(Budget::new(limit)?))
        }
    }
}

pub fn set_budget(conn: &Connection, monthly_limit: Decimal) -> Result<Budget> {
    let budget = Budget::new(monthly_limit)?;
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![BUDGET_KEY, budget.monthly_limit().to_string()],
    )?;
    tracing::info!(limit = %budget.monthly_limit(), "monthly budget set");
    Ok(budget)
}

/// Returns true when a budget was configured.
pub fn clear_budget(conn: &Connection) -> Result<bool> {
    let n = conn.execute("DELETE FROM settings WHERE key=?1", params![BUDGET_KEY])?;
    Ok(n > 0)
}
