// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rule based observations over one month of transactions.
//!
//! Rules run in a fixed order and every rule that fires contributes one
//! insight:
//!
//! 1. top category above 30% of spending
//! 2. weekend spending above weekday spending (more than 5 transactions)
//! 3. budget pacing once more than 50% of the budget is used
//! 4. dining savings tip when Food & Dining exceeds 200
//! 5. encouragement while under 80% of the budget
//!
//! An empty month yields only [`InsightKind::GetStarted`]; a month where no
//! rule fires yields only [`InsightKind::BuildingData`].

use crate::aggregate::{aggregate, AggregationResult};
use crate::budget::percentage_used;
use crate::models::{Budget, Category, Transaction};
use crate::utils::{fmt_money, fmt_percent};
use crate::window::MonthWindow;
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;

const TOP_CATEGORY_SHARE: u32 = 30;
const WEEKEND_MIN_TRANSACTIONS: usize = 5;
const PACING_ABOVE_PERCENT: u32 = 50;
const DINING_TIP_ABOVE: u32 = 200;
const ENCOURAGE_BELOW_PERCENT: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    GetStarted,
    TopCategory,
    WeekendSpender,
    BudgetPacing,
    DiningSavings,
    OnTrack,
    BuildingData,
}

impl InsightKind {
    /// Leading icon for presentation.
    pub fn icon(&self) -> &'static str {
        match self {
            InsightKind::GetStarted => "🌟",
            InsightKind::TopCategory => "🎯",
            InsightKind::WeekendSpender => "🎉",
            InsightKind::BudgetPacing => "💡",
            InsightKind::DiningSavings => "🍕",
            InsightKind::OnTrack => "🌟",
            InsightKind::BuildingData => "📊",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

impl Insight {
    fn new(kind: InsightKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Generate insights for `month_transactions`, anchored at `reference`.
///
/// `month_transactions` is expected to already be filtered to the reference
/// month; pacing uses the days left in that month.
pub fn generate_insights(
    month_transactions: &[Transaction],
    budget: Option<&Budget>,
    reference: NaiveDate,
) -> Vec<Insight> {
    if month_transactions.is_empty() {
        return vec![Insight::new(
            InsightKind::GetStarted,
            "Start Your Journey",
            "Begin tracking your expenses to unlock personalized insights and savings tips!",
        )];
    }

    let agg = aggregate(month_transactions, reference);
    let rules: [fn(&MonthFacts<'_>) -> Option<Insight>; 5] = [
        top_category_alert,
        weekend_spender,
        budget_pacing,
        dining_savings,
        on_track,
    ];
    let ctx = MonthFacts {
        transactions: month_transactions,
        agg: &agg,
        budget,
        reference,
    };

    let mut insights: Vec<Insight> = rules.iter().filter_map(|rule| rule(&ctx)).collect();
    tracing::debug!(
        fired = ?insights.iter().map(|i| i.kind).collect::<Vec<_>>(),
        "evaluated insight rules"
    );
    if insights.is_empty() {
        insights.push(Insight::new(
            InsightKind::BuildingData,
            "Building Insights",
            "Keep adding expenses to unlock more personalized insights and savings recommendations!",
        ));
    }
    insights
}

struct MonthFacts<'a> {
    transactions: &'a [Transaction],
    agg: &'a AggregationResult,
    budget: Option<&'a Budget>,
    reference: NaiveDate,
}

fn top_category_alert(ctx: &MonthFacts<'_>) -> Option<Insight> {
    let top = ctx.agg.top_category?;
    let total = ctx.agg.total_spent;
    let top_total = ctx.agg.category_total(top);
    // top_total <= total, so the share stays within 0..=100
    let share = top_total.checked_div(total)? * Decimal::ONE_HUNDRED;
    if share <= Decimal::from(TOP_CATEGORY_SHARE) {
        return None;
    }
    Some(Insight::new(
        InsightKind::TopCategory,
        "Top Spending Alert",
        format!(
            "You're spending {}% of your monthly spending on {}. Consider setting a specific limit for this category.",
            fmt_percent(share),
            top
        ),
    ))
}

fn weekend_spender(ctx: &MonthFacts<'_>) -> Option<Insight> {
    if ctx.transactions.len() <= WEEKEND_MIN_TRANSACTIONS {
        return None;
    }
    let (weekend, weekday) =
        ctx.transactions
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(we, wd), t| {
                if is_weekend(t.date) {
                    (we.saturating_add(t.amount), wd)
                } else {
                    (we, wd.saturating_add(t.amount))
                }
            });
    if weekend <= weekday {
        return None;
    }
    Some(Insight::new(
        InsightKind::WeekendSpender,
        "Weekend Spender",
        "You tend to spend more on weekends. Planning weekend activities in advance could help manage costs.",
    ))
}

fn budget_pacing(ctx: &MonthFacts<'_>) -> Option<Insight> {
    let budget = ctx.budget?;
    let spent = ctx.agg.total_spent;
    if percentage_used(spent, budget) <= Decimal::from(PACING_ABOVE_PERCENT) {
        return None;
    }
    let days_left = MonthWindow::containing(ctx.reference).days_remaining(ctx.reference);
    if days_left == 0 {
        return None;
    }
    // Negative once the budget is already exceeded
    let recommended_daily =
        budget.monthly_limit().saturating_sub(spent) / Decimal::from(days_left);
    Some(Insight::new(
        InsightKind::BudgetPacing,
        "Budget Pacing",
        format!(
            "To stay within budget, try to spend no more than {} per day for the rest of the month.",
            fmt_money(recommended_daily)
        ),
    ))
}

fn dining_savings(ctx: &MonthFacts<'_>) -> Option<Insight> {
    if ctx.agg.category_total(Category::FoodDining) <= Decimal::from(DINING_TIP_ABOVE) {
        return None;
    }
    Some(Insight::new(
        InsightKind::DiningSavings,
        "Dining Savings Tip",
        "Consider meal prepping or cooking at home more often. You could save $50-100 monthly on dining expenses!",
    ))
}

fn on_track(ctx: &MonthFacts<'_>) -> Option<Insight> {
    let budget = ctx.budget?;
    if percentage_used(ctx.agg.total_spent, budget) >= Decimal::from(ENCOURAGE_BELOW_PERCENT) {
        return None;
    }
    Some(Insight::new(
        InsightKind::OnTrack,
        "Great Job!",
        "You're staying well within your budget. Keep up the excellent financial discipline!",
    ))
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
