//! Transaction record and its input shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::TransactionId;

/// A single recorded expense.
///
/// Every instance held by the store has passed field validation at the
/// moment it was inserted or last updated (import is the one exception,
/// which relies on a shape check only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, assigned at creation and never changed.
    pub id: TransactionId,
    /// What the money was spent on.
    pub description: String,
    /// Spent amount in the local currency (non-negative).
    pub amount: f64,
    /// Spending category label.
    pub category: String,
    /// Calendar date of the expense.
    pub date: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Raw form input for a new transaction, prior to validation.
///
/// Field values are kept exactly as entered; the store normalizes the
/// description and validates everything before a [`Transaction`] is
/// minted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    /// Description as typed.
    pub description: String,
    /// Amount as typed (e.g. `"5000.50"`).
    pub amount: String,
    /// Category as typed.
    pub category: String,
    /// Date as typed (`YYYY-MM-DD`).
    pub date: String,
}

/// Typed partial update for an existing transaction.
///
/// Only the four user-editable fields can be patched; identity and
/// timestamp fields are structurally unreachable from here. Values are
/// raw input and go through the same validation as a draft.
///
/// # Examples
///
/// ```
/// use spendbook::models::TransactionPatch;
///
/// let patch = TransactionPatch::new()
///     .description("Weekly groceries")
///     .amount("4500");
/// assert!(patch.date.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    /// Replacement description, as typed.
    pub description: Option<String>,
    /// Replacement amount, as typed.
    pub amount: Option<String>,
    /// Replacement category, as typed.
    pub category: Option<String>,
    /// Replacement date, as typed (`YYYY-MM-DD`).
    pub date: Option<String>,
}

impl TransactionPatch {
    /// Creates an empty patch that changes nothing.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement description.
    #[inline]
    #[must_use]
    pub fn description<T: Into<String>>(mut self, value: T) -> Self {
        self.description = Some(value.into());
        self
    }

    /// Sets a replacement amount.
    #[inline]
    #[must_use]
    pub fn amount<T: Into<String>>(mut self, value: T) -> Self {
        self.amount = Some(value.into());
        self
    }

    /// Sets a replacement category.
    #[inline]
    #[must_use]
    pub fn category<T: Into<String>>(mut self, value: T) -> Self {
        self.category = Some(value.into());
        self
    }

    /// Sets a replacement date.
    #[inline]
    #[must_use]
    pub fn date<T: Into<String>>(mut self, value: T) -> Self {
        self.date = Some(value.into());
        self
    }

    /// Returns `true` when no field would change.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_transaction() -> Transaction {
        Transaction {
            id: TransactionId::new("txn_1".to_owned()),
            description: "Morning coffee".to_owned(),
            amount: 1500.0,
            category: "Food".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            updated_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let tx = test_transaction();
        let json = serde_json::to_string(&tx).unwrap();
        assert!(json.contains(r#""createdAt""#));
        assert!(json.contains(r#""updatedAt""#));
        assert!(json.contains(r#""date":"2025-01-15""#));
    }

    #[test]
    fn serialize_roundtrip() {
        let tx = test_transaction();
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn deserializes_a_plain_record() {
        let json = r#"{
            "id": "txn_9",
            "description": "Bus ticket",
            "amount": 300.5,
            "category": "Transport",
            "date": "2025-02-28",
            "createdAt": "2025-02-28T10:00:00Z",
            "updatedAt": "2025-02-28T10:00:00Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, TransactionId::new("txn_9".to_owned()));
        assert!((tx.amount - 300.5).abs() < f64::EPSILON);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }

    #[test]
    fn patch_builder_sets_only_named_fields() {
        let patch = TransactionPatch::new().category("Transport");
        assert_eq!(patch.category.as_deref(), Some("Transport"));
        assert!(patch.description.is_none());
        assert!(patch.amount.is_none());
        assert!(patch.date.is_none());
        assert!(!patch.is_empty());
        assert!(TransactionPatch::new().is_empty());
    }
}
