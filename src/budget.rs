// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::AggregationResult;
use crate::models::Budget;
use rust_decimal::Decimal;
use serde::Serialize;

const DANGER_ABOVE: u32 = 80;
const WARNING_ABOVE: u32 = 60;

/// Budget consumption severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Warning,
    Danger,
}

impl Tier {
    /// Exclusive lower bounds: above 80 is danger, above 60 is warning.
    pub fn from_percentage(percentage_used: Decimal) -> Self {
        if percentage_used > Decimal::from(DANGER_ABOVE) {
            Tier::Danger
        } else if percentage_used > Decimal::from(WARNING_ABOVE) {
            Tier::Warning
        } else {
            Tier::Good
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Warning => "warning",
            Tier::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEvaluation {
    pub monthly_limit: Decimal,
    pub spent: Decimal,
    /// Negative once the limit is exceeded.
    pub remaining: Decimal,
    pub percentage_used: Decimal,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    NotConfigured,
    Configured(BudgetEvaluation),
}

impl BudgetStatus {
    pub fn evaluation(&self) -> Option<&BudgetEvaluation> {
        match self {
            BudgetStatus::NotConfigured => None,
            BudgetStatus::Configured(e) => Some(e),
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        self.evaluation().map(|e| e.tier)
    }
}

/// Percentage of `budget` consumed by `spent`.
///
/// Saturates at `Decimal::MAX` when the ratio is not representable.
pub fn percentage_used(spent: Decimal, budget: &Budget) -> Decimal {
    spent
        .checked_div(budget.monthly_limit())
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

pub fn evaluate(aggregation: &AggregationResult, budget: Option<&Budget>) -> BudgetStatus {
    let Some(budget) = budget else {
        return BudgetStatus::NotConfigured;
    };
    let spent = aggregation.total_spent;
    let percentage_used = percentage_used(spent, budget);
    BudgetStatus::Configured(BudgetEvaluation {
        monthly_limit: budget.monthly_limit(),
        spent,
        remaining: budget.monthly_limit().saturating_sub(spent),
        percentage_used,
        tier: Tier::from_percentage(percentage_used),
    })
}
