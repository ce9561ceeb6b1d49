// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Transaction};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Displayed in place of a top category when nothing was spent.
pub const NO_TOP_CATEGORY: &str = "-";

/// Totals over one snapshot of transactions. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub total_spent: Decimal,
    pub transaction_count: usize,
    /// Total divided by the reference date's day of month.
    pub average_daily: Decimal,
    pub category_totals: BTreeMap<Category, Decimal>,
    pub top_category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Decimal,
    /// Share of the overall total, 0..=100.
    pub percentage: Decimal,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    pub fn category_total(&self, category: Category) -> Decimal {
        self.category_totals
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    pub fn top_category_label(&self) -> &'static str {
        self.top_category
            .map(|c| c.label())
            .unwrap_or(NO_TOP_CATEGORY)
    }

    /// Categories by total, largest first. Ties keep declaration order.
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        if self.total_spent.is_zero() {
            return Vec::new();
        }
        let mut items: Vec<CategoryShare> = self
            .category_totals
            .iter()
            .map(|(category, total)| CategoryShare {
                category: *category,
                total: *total,
                percentage: *total / self.total_spent * Decimal::ONE_HUNDRED,
            })
            .collect();
        items.sort_by(|a, b| b.total.cmp(&a.total));
        items
    }
}

/// Aggregate `transactions` relative to `reference`.
///
/// Total on empty input: zero totals, no top category. Sums saturate at
/// `Decimal::MAX` instead of overflowing.
pub fn aggregate(transactions: &[Transaction], reference: NaiveDate) -> AggregationResult {
    let mut category_totals: BTreeMap<Category, Decimal> = BTreeMap::new();
    let mut total_spent = Decimal::ZERO;
    for t in transactions {
        total_spent = total_spent.saturating_add(t.amount);
        let slot = category_totals.entry(t.category).or_insert(Decimal::ZERO);
        *slot = slot.saturating_add(t.amount);
    }

    let average_daily = if transactions.is_empty() {
        Decimal::ZERO
    } else {
        total_spent / Decimal::from(reference.day())
    };

    let top_category = top_of(&category_totals);

    let result = AggregationResult {
        total_spent,
        transaction_count: transactions.len(),
        average_daily,
        category_totals,
        top_category,
    };
    tracing::debug!(
        total = %result.total_spent,
        count = result.transaction_count,
        top = result.top_category_label(),
        "aggregated transactions"
    );
    result
}

// Strictly-greater comparison keeps the earliest category on ties.
fn top_of(totals: &BTreeMap<Category, Decimal>) -> Option<Category> {
    let mut best: Option<(Category, Decimal)> = None;
    for (category, total) in totals {
        match best {
            Some((_, best_total)) if *total <= best_total => {}
            _ => best = Some((*category, *total)),
        }
    }
    best.map(|(c, _)| c)
}
