// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Input rejected at the boundary, before it can reach the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpendError {
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("Monthly budget must be greater than zero, got {0}")]
    NonPositiveBudget(Decimal),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
}
