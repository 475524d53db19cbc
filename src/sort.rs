//! Stable, type-aware ordering of transaction collections.

use core::cmp::Ordering;

use crate::models::Transaction;

/// Field a transaction collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Chronological order by transaction date.
    Date,
    /// Case-insensitive text order by description.
    Description,
    /// Numeric order by amount.
    Amount,
    /// Case-insensitive text order by category.
    Category,
}

/// Direction of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Returns a new collection ordered by the given field and direction.
///
/// The input is never mutated. The sort is stable: transactions with
/// equal keys keep their input order in both directions (descending
/// reverses the comparator, not the output).
#[must_use]
pub fn sort(
    transactions: &[Transaction],
    field: SortField,
    direction: SortDirection,
) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|left, right| {
        let ordering = compare(left, right, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Compares two transactions on a single field.
fn compare(left: &Transaction, right: &Transaction, field: SortField) -> Ordering {
    match field {
        SortField::Date => left.date.cmp(&right.date),
        SortField::Description => case_insensitive(&left.description, &right.description),
        SortField::Amount => left.amount.total_cmp(&right.amount),
        SortField::Category => case_insensitive(&left.category, &right.category),
    }
}

/// Case-insensitive text comparison.
fn case_insensitive(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionId;
    use chrono::DateTime;

    fn test_transaction(id: &str, description: &str, amount: f64, date: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(id.to_owned()),
            description: description.to_owned(),
            amount,
            category: "Misc".to_owned(),
            date: date.parse().unwrap(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            updated_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    fn ids(transactions: &[Transaction]) -> Vec<&str> {
        transactions.iter().map(|tx| tx.id.as_inner()).collect()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            test_transaction("t1", "beta", 50.0, "2025-03-01"),
            test_transaction("t2", "Alpha", 200.0, "2025-01-20"),
            test_transaction("t3", "gamma", 120.5, "2025-02-10"),
        ]
    }

    #[test]
    fn sorts_dates_chronologically() {
        let sorted = sort(&sample(), SortField::Date, SortDirection::Ascending);
        assert_eq!(ids(&sorted), ["t2", "t3", "t1"]);
    }

    #[test]
    fn sorts_amounts_numerically() {
        // Lexicographic order would put 120.5 before 50.
        let sorted = sort(&sample(), SortField::Amount, SortDirection::Ascending);
        assert_eq!(ids(&sorted), ["t1", "t3", "t2"]);
    }

    #[test]
    fn sorts_text_case_insensitively() {
        let sorted = sort(&sample(), SortField::Description, SortDirection::Ascending);
        assert_eq!(ids(&sorted), ["t2", "t1", "t3"]);
    }

    #[test]
    fn descending_is_the_reverse_of_ascending() {
        let transactions = sample();
        let ascending = sort(&transactions, SortField::Date, SortDirection::Ascending);
        let descending = sort(&ascending, SortField::Date, SortDirection::Descending);
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
    }

    #[test]
    fn sorting_a_sorted_collection_is_idempotent() {
        let once = sort(&sample(), SortField::Amount, SortDirection::Ascending);
        let twice = sort(&once, SortField::Amount, SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn input_is_not_mutated() {
        let transactions = sample();
        let _sorted = sort(&transactions, SortField::Date, SortDirection::Descending);
        assert_eq!(ids(&transactions), ["t1", "t2", "t3"]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let transactions = vec![
            test_transaction("t1", "first", 100.0, "2025-01-10"),
            test_transaction("t2", "second", 100.0, "2025-01-10"),
            test_transaction("t3", "third", 100.0, "2025-01-10"),
        ];
        let ascending = sort(&transactions, SortField::Amount, SortDirection::Ascending);
        assert_eq!(ids(&ascending), ["t1", "t2", "t3"]);
        let descending = sort(&transactions, SortField::Amount, SortDirection::Descending);
        assert_eq!(ids(&descending), ["t1", "t2", "t3"]);
    }
}
