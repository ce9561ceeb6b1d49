// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::SpendError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending categories.
///
/// Declaration order matters: it is the priority order used by the
/// classifier and the tie-break order for the top category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Bills & Utilities")]
    BillsUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::FoodDining,
        Category::Transportation,
        Category::Shopping,
        Category::BillsUtilities,
        Category::Healthcare,
        Category::Education,
        Category::Entertainment,
        Category::PersonalCare,
        Category::Uncategorized,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::FoodDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Shopping => "Shopping",
            Category::BillsUtilities => "Bills & Utilities",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::PersonalCare => "Personal Care",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = SpendError;

    /// Case-insensitive match on the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SpendError::UnknownCategory(wanted.to_string()))
    }
}

/// A recorded expense. Immutable once stored; only deletion by `id` is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        id: i64,
        amount: Decimal,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Result<Self, SpendError> {
        if amount <= Decimal::ZERO {
            return Err(SpendError::NonPositiveAmount(amount));
        }
        Ok(Self {
            id,
            amount,
            description: description.into(),
            category,
            date,
            created_at,
        })
    }
}

/// Entry as submitted by the user, before an id is assigned.
///
/// `category` is `None` when the user left the selection empty; the store
/// then asks the classifier for a suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub description: String,
    pub category: Option<Category>,
    pub date: NaiveDate,
}

/// A configured monthly spending limit. Always strictly positive; "no budget"
/// is represented by `Option<Budget>::None`, never by a zero limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Budget {
    monthly_limit: Decimal,
}

impl Budget {
    pub fn new(monthly_limit: Decimal) -> Result<Self, SpendError> {
        if monthly_limit <= Decimal::ZERO {
            return Err(SpendError::NonPositiveBudget(monthly_limit));
        }
        Ok(Self { monthly_limit })
    }

    pub fn monthly_limit(&self) -> Decimal {
        self.monthly_limit
    }
}
