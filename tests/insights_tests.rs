// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use spendlens::insights::{generate_insights, is_weekend, Insight, InsightKind};
use spendlens::models::{Budget, Category, Transaction};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn tx(id: i64, amount: &str, category: Category, d: &str) -> Transaction {
    Transaction::new(
        id,
        amount.parse().unwrap(),
        "test",
        category,
        date(d),
        Utc::now(),
    )
    .unwrap()
}

fn budget(limit: &str) -> Budget {
    Budget::new(limit.parse::<Decimal>().unwrap()).unwrap()
}

fn kinds(insights: &[Insight]) -> Vec<InsightKind> {
    insights.iter().map(|i| i.kind).collect()
}

fn find(insights: &[Insight], kind: InsightKind) -> &Insight {
    insights.iter().find(|i| i.kind == kind).unwrap()
}

fn two_transaction_month() -> Vec<Transaction> {
    vec![
        tx(1, "50", Category::FoodDining, "2025-03-01"),
        tx(2, "20", Category::Transportation, "2025-03-02"),
    ]
}

#[test]
fn empty_month_only_gets_started() {
    let b = budget("100");
    for budget in [None, Some(&b)] {
        let out = generate_insights(&[], budget, date("2025-03-03"));
        assert_eq!(kinds(&out), vec![InsightKind::GetStarted]);
        assert_eq!(out[0].title, "Start Your Journey");
    }
}

#[test]
fn rules_fire_in_fixed_order() {
    let b = budget("100");
    let out = generate_insights(&two_transaction_month(), Some(&b), date("2025-03-03"));
    assert_eq!(
        kinds(&out),
        vec![
            InsightKind::TopCategory,
            InsightKind::BudgetPacing,
            InsightKind::OnTrack
        ]
    );
}

#[test]
fn top_category_text_uses_one_decimal() {
    let out = generate_insights(&two_transaction_month(), None, date("2025-03-03"));
    let top = find(&out, InsightKind::TopCategory);
    // 50 / 70
    assert!(top.description.contains("71.4%"), "{}", top.description);
    assert!(top.description.contains("Food & Dining"));
}

#[test]
fn pacing_spreads_remaining_budget_over_days_left() {
    let b = budget("100");
    let out = generate_insights(&two_transaction_month(), Some(&b), date("2025-03-03"));
    let pacing = find(&out, InsightKind::BudgetPacing);
    // (100 - 70) / (31 - 3)
    assert!(pacing.description.contains("$1.07 per day"), "{}", pacing.description);
}

#[test]
fn no_pacing_on_last_day_of_month() {
    let b = budget("100");
    let out = generate_insights(&two_transaction_month(), Some(&b), date("2025-03-31"));
    assert_eq!(
        kinds(&out),
        vec![InsightKind::TopCategory, InsightKind::OnTrack]
    );
}

#[test]
fn no_pacing_at_exactly_half_the_budget() {
    let b = budget("140");
    let out = generate_insights(&two_transaction_month(), Some(&b), date("2025-03-03"));
    assert!(!kinds(&out).contains(&InsightKind::BudgetPacing));
    assert!(kinds(&out).contains(&InsightKind::OnTrack));
}

#[test]
fn exhausted_budget_recommends_negative_daily_figure() {
    let b = budget("50");
    let out = generate_insights(&two_transaction_month(), Some(&b), date("2025-03-03"));
    let pacing = find(&out, InsightKind::BudgetPacing);
    // (50 - 70) / 28
    assert!(pacing.description.contains("-$0.71 per day"), "{}", pacing.description);
    assert!(!kinds(&out).contains(&InsightKind::OnTrack));
}

#[test]
fn overspent_month_spreads_the_overrun_over_days_left() {
    let b = budget("100");
    let txs = vec![tx(1, "130", Category::Shopping, "2025-03-05")];
    let out = generate_insights(&txs, Some(&b), date("2025-03-21"));
    let pacing = find(&out, InsightKind::BudgetPacing);
    // (100 - 130) / (31 - 21)
    assert!(pacing.description.contains("-$3.00 per day"), "{}", pacing.description);
}

#[test]
fn six_weekend_transactions_flag_weekend_spender() {
    let days = [
        "2025-03-01",
        "2025-03-02",
        "2025-03-08",
        "2025-03-09",
        "2025-03-15",
        "2025-03-16",
    ];
    let txs: Vec<Transaction> = days
        .iter()
        .enumerate()
        .map(|(i, d)| tx(i as i64 + 1, "10", Category::Entertainment, d))
        .collect();
    assert!(days.iter().all(|d| is_weekend(date(d))));
    let out = generate_insights(&txs, None, date("2025-03-20"));
    assert!(kinds(&out).contains(&InsightKind::WeekendSpender));
}

#[test]
fn weekend_rule_needs_more_than_five_transactions() {
    let days = [
        "2025-03-01",
        "2025-03-02",
        "2025-03-08",
        "2025-03-09",
        "2025-03-15",
    ];
    let txs: Vec<Transaction> = days
        .iter()
        .enumerate()
        .map(|(i, d)| tx(i as i64 + 1, "10", Category::Entertainment, d))
        .collect();
    let out = generate_insights(&txs, None, date("2025-03-20"));
    assert!(!kinds(&out).contains(&InsightKind::WeekendSpender));
}

#[test]
fn weekend_must_strictly_exceed_weekdays() {
    // 3 x 10 on weekends, 3 x 10 on weekdays
    let txs = vec![
        tx(1, "10", Category::Shopping, "2025-03-01"),
        tx(2, "10", Category::Shopping, "2025-03-02"),
        tx(3, "10", Category::Shopping, "2025-03-08"),
        tx(4, "10", Category::Shopping, "2025-03-03"),
        tx(5, "10", Category::Shopping, "2025-03-04"),
        tx(6, "10", Category::Shopping, "2025-03-05"),
    ];
    let out = generate_insights(&txs, None, date("2025-03-20"));
    assert!(!kinds(&out).contains(&InsightKind::WeekendSpender));
}

#[test]
fn dining_tip_above_two_hundred() {
    let over = vec![tx(1, "200.01", Category::FoodDining, "2025-03-03")];
    let out = generate_insights(&over, None, date("2025-03-10"));
    assert_eq!(
        kinds(&out),
        vec![InsightKind::TopCategory, InsightKind::DiningSavings]
    );

    let at = vec![tx(1, "200", Category::FoodDining, "2025-03-03")];
    let out = generate_insights(&at, None, date("2025-03-10"));
    assert!(!kinds(&out).contains(&InsightKind::DiningSavings));
}

#[test]
fn fallback_when_nothing_fires() {
    // Four equal categories: top share is 25%, no budget, weekdays only
    let txs = vec![
        tx(1, "10", Category::FoodDining, "2025-03-03"),
        tx(2, "10", Category::Transportation, "2025-03-04"),
        tx(3, "10", Category::Shopping, "2025-03-05"),
        tx(4, "10", Category::Healthcare, "2025-03-06"),
    ];
    let out = generate_insights(&txs, None, date("2025-03-10"));
    assert_eq!(kinds(&out), vec![InsightKind::BuildingData]);
    assert_eq!(out[0].title, "Building Insights");
}

#[test]
fn encouragement_stops_at_eighty_percent() {
    let txs = vec![
        tx(1, "20", Category::FoodDining, "2025-03-03"),
        tx(2, "20", Category::Transportation, "2025-03-04"),
        tx(3, "20", Category::Shopping, "2025-03-05"),
        tx(4, "20", Category::Healthcare, "2025-03-06"),
    ];
    let b = budget("100");
    let out = generate_insights(&txs, Some(&b), date("2025-03-31"));
    assert_eq!(kinds(&out), vec![InsightKind::BuildingData]);
}

#[test]
fn repeated_calls_give_the_same_answer() {
    let b = budget("100");
    let txs = two_transaction_month();
    let first = generate_insights(&txs, Some(&b), date("2025-03-03"));
    let second = generate_insights(&txs, Some(&b), date("2025-03-03"));
    assert_eq!(first, second);
    assert_eq!(txs, two_transaction_month());
}

#[test]
fn huge_amounts_with_tiny_budget_do_not_overflow() {
    let b = budget("0.0000000001");
    let txs = vec![
        tx(1, "50000000000000000000000000000", Category::FoodDining, "2025-03-03"),
        tx(2, "50000000000000000000000000000", Category::FoodDining, "2025-03-04"),
    ];
    let out = generate_insights(&txs, Some(&b), date("2025-03-05"));
    assert_eq!(
        kinds(&out),
        vec![
            InsightKind::TopCategory,
            InsightKind::BudgetPacing,
            InsightKind::DiningSavings
        ]
    );
    assert!(find(&out, InsightKind::TopCategory).description.contains("100.0%"));
    assert!(find(&out, InsightKind::BudgetPacing).description.contains("-$"));
}
