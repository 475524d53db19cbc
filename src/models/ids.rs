//! Newtype wrapper for transaction identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a transaction.
///
/// An opaque string token, minted once at creation and never reused or
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wraps an existing string token.
    #[inline]
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Mints a fresh identifier.
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("txn_{}", Uuid::new_v4()))
    }

    /// Returns a reference to the inner string.
    #[inline]
    #[must_use]
    pub fn as_inner(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner string.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for TransactionId {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for TransactionId {
    #[inline]
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_prefixed() {
        let first = TransactionId::generate();
        let second = TransactionId::generate();
        assert_ne!(first, second);
        assert!(first.as_inner().starts_with("txn_"));
    }

    #[test]
    fn serde_is_transparent() {
        let id = TransactionId::new("txn_abc".to_owned());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""txn_abc""#);
        let back: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_shows_the_raw_token() {
        let id = TransactionId::new("txn_1".to_owned());
        assert_eq!(id.to_string(), "txn_1");
        assert_eq!(id.into_inner(), "txn_1");
    }
}
