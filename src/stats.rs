//! Derived statistics over a transaction collection.
//!
//! All functions are pure and read-only; nothing is cached. They are
//! cheap enough to recompute on every view refresh at personal-finance
//! scale.

use chrono::{Days, NaiveDate};

use crate::models::Transaction;

/// Budget position relative to the configured cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    /// No cap configured.
    NoCap,
    /// Spending is at or under the cap.
    Under {
        /// Amount left before the cap is hit.
        remaining: f64,
    },
    /// Spending exceeds the cap.
    Over {
        /// Amount by which the cap is exceeded.
        overage: f64,
    },
}

/// Number of recorded transactions.
#[inline]
#[must_use]
pub const fn total_count(transactions: &[Transaction]) -> usize {
    transactions.len()
}

/// Sum of every transaction amount.
#[must_use]
pub fn total_spending(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|tx| tx.amount).sum()
}

/// Category with the highest summed amount.
///
/// Ties go to the category encountered first in iteration order. `None`
/// for an empty collection.
#[must_use]
pub fn top_category(transactions: &[Transaction]) -> Option<String> {
    // Insertion-ordered accumulator so the tie-break is deterministic.
    let mut totals: Vec<(&str, f64)> = Vec::new();
    for tx in transactions {
        match totals
            .iter_mut()
            .find(|(name, _)| *name == tx.category.as_str())
        {
            Some((_, sum)) => *sum += tx.amount,
            None => totals.push((tx.category.as_str(), tx.amount)),
        }
    }
    let mut best: Option<(&str, f64)> = None;
    for (name, sum) in totals {
        if best.is_none_or(|(_, best_sum)| sum > best_sum) {
            best = Some((name, sum));
        }
    }
    best.map(|(name, _)| name.to_owned())
}

/// Sum of amounts dated within the 7-day window ending at `today`:
/// `[today - 6 days, today]`, both ends inclusive.
///
/// `today` is a parameter so the result is deterministic and testable,
/// never coupled to the wall clock.
#[must_use]
pub fn last_7_days_spending(transactions: &[Transaction], today: NaiveDate) -> f64 {
    let window_start = today.checked_sub_days(Days::new(6)).unwrap_or(NaiveDate::MIN);
    transactions
        .iter()
        .filter(|tx| tx.date >= window_start && tx.date <= today)
        .map(|tx| tx.amount)
        .sum()
}

/// Budget position for the given total spending and optional cap.
#[must_use]
pub fn budget_status(total_spending: f64, cap: Option<f64>) -> BudgetStatus {
    match cap {
        None => BudgetStatus::NoCap,
        Some(limit) => {
            let remaining = limit - total_spending;
            if remaining >= 0.0 {
                BudgetStatus::Under { remaining }
            } else {
                BudgetStatus::Over {
                    overage: remaining.abs(),
                }
            }
        }
    }
}
