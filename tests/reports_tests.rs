// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use spendlens::budget::Tier;
use spendlens::commands::{budgets, reports};
use spendlens::insights::InsightKind;
use spendlens::models::{Category, NewTransaction};
use spendlens::{cli, db, ledger};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let rows = [
        ("50", Category::FoodDining, "2025-03-01"),
        ("20", Category::Transportation, "2025-03-02"),
        // Outside March 2025; never part of the monthly figures
        ("500", Category::Shopping, "2025-02-27"),
        ("75", Category::Shopping, "2024-03-10"),
    ];
    for (amount, cat, d) in rows {
        ledger::add_transaction(
            &conn,
            NewTransaction {
                amount: amount.parse().unwrap(),
                description: "seed".to_string(),
                category: Some(cat),
                date: date(d),
            },
            Utc::now(),
        )
        .unwrap();
    }
    conn
}

#[test]
fn summary_covers_reference_month_only() {
    let conn = setup();
    let s = reports::build_summary(&conn, date("2025-03-03")).unwrap();
    assert_eq!(s.month, "2025-03");
    assert_eq!(s.total_spent, Decimal::from(70));
    assert_eq!(s.transaction_count, 2);
    assert_eq!(s.top_category, "Food & Dining");
}

#[test]
fn summary_for_quiet_month_uses_sentinel() {
    let conn = setup();
    let s = reports::build_summary(&conn, date("2025-04-15")).unwrap();
    assert_eq!(s.total_spent, Decimal::ZERO);
    assert_eq!(s.average_daily, Decimal::ZERO);
    assert_eq!(s.top_category, "-");
    assert!(reports::build_breakdown(&conn, date("2025-04-15"))
        .unwrap()
        .is_empty());
}

#[test]
fn insights_follow_stored_budget() {
    let conn = setup();
    let without = reports::build_insights(&conn, date("2025-03-03")).unwrap();
    assert_eq!(
        without.iter().map(|i| i.kind).collect::<Vec<_>>(),
        vec![InsightKind::TopCategory]
    );

    ledger::set_budget(&conn, Decimal::from(100)).unwrap();
    let with = reports::build_insights(&conn, date("2025-03-03")).unwrap();
    assert_eq!(
        with.iter().map(|i| i.kind).collect::<Vec<_>>(),
        vec![
            InsightKind::TopCategory,
            InsightKind::BudgetPacing,
            InsightKind::OnTrack
        ]
    );
}

#[test]
fn budget_status_from_cli_reference_date() {
    let conn = setup();
    let matches =
        cli::build_cli().get_matches_from(["spendlens", "budget", "status", "--today", "2025-03-03"]);
    let Some(("budget", budget_m)) = matches.subcommand() else {
        panic!("budget command not parsed");
    };
    let Some(("status", status_m)) = budget_m.subcommand() else {
        panic!("status subcommand not parsed");
    };

    let st = budgets::current_status(&conn, status_m).unwrap();
    assert!(st.evaluation().is_none());
    assert_eq!(budgets::status_message(&st), "No budget set");

    ledger::set_budget(&conn, Decimal::from(100)).unwrap();
    let st = budgets::current_status(&conn, status_m).unwrap();
    let e = st.evaluation().unwrap();
    assert_eq!(e.tier, Tier::Warning);
    assert_eq!(e.remaining, Decimal::from(30));
    assert_eq!(budgets::status_message(&st), "Caution: Over 60% of budget used");
}
