// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Calendar-month windows over transaction lists.

use crate::error::SpendError;
use crate::models::Transaction;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A calendar month. Membership uses the date's own year and month fields,
/// never a rolling 30 day span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthWindow {
    year: i32,
    month: u32,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> Result<Self, SpendError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(SpendError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// The month that `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Number of the last day (28..=31).
    pub fn last_day(&self) -> u32 {
        let (y, m) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(y, m, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .map(|d| d.day())
            .unwrap_or(28)
    }

    /// Days left after `reference` within this month; zero on the last day.
    pub fn days_remaining(&self, reference: NaiveDate) -> u32 {
        self.last_day().saturating_sub(reference.day())
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthWindow {
    type Err = SpendError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .map(Self::containing)
            .map_err(|_| SpendError::InvalidMonth(s.to_string()))
    }
}

/// Transactions dated within `year`/`month`, in their original order.
pub fn in_month(transactions: &[Transaction], year: i32, month: u32) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date.year() == year && t.date.month() == month)
        .cloned()
        .collect()
}

/// Transactions in the month of the caller supplied `reference` date.
pub fn current_month(transactions: &[Transaction], reference: NaiveDate) -> Vec<Transaction> {
    in_month(transactions, reference.year(), reference.month())
}
