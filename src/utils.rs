// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::SpendError;
use crate::models::Category;
use crate::window::MonthWindow;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_SYMBOL: &str = "$";

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SpendError::InvalidDate(s.to_string()))?)
}

pub fn parse_month(s: &str) -> Result<MonthWindow> {
    Ok(s.parse::<MonthWindow>()?)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    let s = s.trim();
    Ok(s.parse::<Decimal>()
        .map_err(|_| SpendError::InvalidAmount(s.to_string()))?)
}

pub fn parse_category(s: &str) -> Result<Category> {
    s.parse::<Category>().map_err(|e| {
        anyhow::anyhow!("{} (expected one of: {})", e, category_labels().join(", "))
    })
}

pub fn category_labels() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.label()).collect()
}

/// Value of a clap argument declared `required(true)`.
pub fn required_arg<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    sub.get_one::<String>(name)
        .with_context(|| format!("Missing required argument '--{}'", name))
}

/// `--today` when given, else the local calendar date.
pub fn reference_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("today") {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn round_half_away(d: Decimal, dp: u32) -> Decimal {
    d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Two decimal places, e.g. `12.30`.
pub fn fmt_amount(d: Decimal) -> String {
    format!("{:.2}", round_half_away(d, 2))
}

/// Currency amount with symbol, e.g. `$12.30` or `-$4.00`.
pub fn fmt_money(d: Decimal) -> String {
    if d.is_sign_negative() && !round_half_away(d, 2).is_zero() {
        format!("-{}{}", CURRENCY_SYMBOL, fmt_amount(-d))
    } else {
        format!("{}{}", CURRENCY_SYMBOL, fmt_amount(d.abs()))
    }
}

/// One decimal place, no percent sign.
pub fn fmt_percent(d: Decimal) -> String {
    format!("{:.1}", round_half_away(d, 1))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line; anything else is a single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
