//! The authoritative transaction store.
//!
//! [`TransactionStore`] owns the in-memory transaction collection and
//! the user settings, mediates every mutation, and is the sole writer of
//! persisted state. The query engines ([`crate::search`], [`crate::sort`],
//! [`crate::stats`]) are pure and operate on data fetched from here.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, SpendbookError};
use crate::models::{
    Rates, RatesPatch, Settings, Transaction, TransactionDraft, TransactionId, TransactionPatch,
};
use crate::storage::Storage;
use crate::validate::{self, FieldError, FormErrors};

/// The authoritative, exclusively-owned transaction store.
///
/// Lifecycle: construct with a storage backend (and optionally a clock),
/// [`init`](Self::init) once per session, operate, [`clear`](Self::clear)
/// to wipe. Every mutation is persisted synchronously before the call
/// returns; callers must not issue a second mutation for the same entity
/// before the previous call returns, as there is no queuing.
///
/// A failed save is reported via `tracing::warn!` and leaves the
/// in-memory state intact but unsynced: a reload before the next
/// successful save loses those changes.
#[derive(Debug)]
pub struct TransactionStore<S: Storage, C: Clock = SystemClock> {
    /// Persistence backend.
    storage: S,
    /// Time source for timestamps and export file names.
    clock: C,
    /// Authoritative in-memory collection, in insertion order.
    transactions: Vec<Transaction>,
    /// Authoritative in-memory settings.
    settings: Settings,
}

impl<S: Storage> TransactionStore<S> {
    /// Creates a store over the given backend with the system clock.
    #[inline]
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> TransactionStore<S, C> {
    /// Creates a store over the given backend and time source.
    #[inline]
    #[must_use]
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            transactions: Vec::new(),
            settings: Settings::default(),
        }
    }

    /// Loads persisted transactions and settings into memory.
    ///
    /// A failed or undecodable load falls back to the empty state with a
    /// warning; it never aborts the session.
    pub fn init(&mut self) {
        match self.storage.load_transactions() {
            Ok(transactions) => self.transactions = transactions,
            Err(err) => {
                tracing::warn!(%err, "failed to load transactions, starting empty");
                self.transactions = Vec::new();
            }
        }
        match self.storage.load_settings() {
            Ok(Some(settings)) => self.settings = settings,
            Ok(None) => self.settings = Settings::default(),
            Err(err) => {
                tracing::warn!(%err, "failed to load settings, using defaults");
                self.settings = Settings::default();
            }
        }
    }

    /// Read-only view of the collection, in insertion order.
    #[inline]
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Validates and records a new transaction.
    ///
    /// The description is normalized (trimmed, interior whitespace
    /// collapsed) before validation. On success the minted record is
    /// appended, persisted, and returned.
    ///
    /// # Errors
    ///
    /// Returns [`SpendbookError::Validation`] when any field is
    /// rejected; the collection is left untouched.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let clean = TransactionDraft {
            description: validate::clean_description(&draft.description),
            ..draft
        };
        validate::validate_form(&clean).map_err(SpendbookError::Validation)?;
        let amount = parse_amount(&clean.amount)?;
        let date = parse_date(&clean.date)?;
        let now = self.clock.now();
        let transaction = Transaction {
            id: TransactionId::generate(),
            description: clean.description,
            amount,
            category: clean.category,
            date,
            created_at: now,
            updated_at: now,
        };
        self.transactions.push(transaction.clone());
        self.persist_transactions();
        Ok(transaction)
    }

    /// Applies a partial update to the transaction with the given id.
    ///
    /// Present patch fields are validated (and the description
    /// normalized) before anything is touched. An unknown id is a no-op
    /// reported as `Ok(false)` so callers can decide how to react; a
    /// match is merged, stamped with a fresh `updated_at`, persisted, and
    /// reported as `Ok(true)`.
    ///
    /// # Errors
    ///
    /// Returns [`SpendbookError::Validation`] when a present patch field
    /// is rejected; the collection is left untouched.
    pub fn update(&mut self, id: &TransactionId, patch: TransactionPatch) -> Result<bool> {
        let description = patch.description.as_deref().map(validate::clean_description);
        let errors = FormErrors {
            description: description
                .as_deref()
                .and_then(|value| validate::validate_description(value).err()),
            amount: patch
                .amount
                .as_deref()
                .and_then(|value| validate::validate_amount(value).err()),
            date: patch
                .date
                .as_deref()
                .and_then(|value| validate::validate_date(value).err()),
            category: patch
                .category
                .as_deref()
                .and_then(|value| validate::validate_category(value).err()),
        };
        if !errors.is_empty() {
            return Err(SpendbookError::Validation(errors));
        }
        let amount = patch.amount.as_deref().map(parse_amount).transpose()?;
        let date = patch.date.as_deref().map(parse_date).transpose()?;
        let now = self.clock.now();
        let Some(existing) = self.transactions.iter_mut().find(|tx| tx.id == *id) else {
            return Ok(false);
        };
        if let Some(value) = description {
            existing.description = value;
        }
        if let Some(value) = amount {
            existing.amount = value;
        }
        if let Some(value) = patch.category {
            existing.category = value;
        }
        if let Some(value) = date {
            existing.date = value;
        }
        existing.updated_at = now;
        self.persist_transactions();
        Ok(true)
    }

    /// Removes the transaction with the given id.
    ///
    /// An unknown id is a no-op reported as `false`.
    pub fn delete(&mut self, id: &TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != *id);
        if self.transactions.len() == before {
            return false;
        }
        self.persist_transactions();
        true
    }

    /// Current exchange rates.
    #[inline]
    #[must_use]
    pub const fn rates(&self) -> Rates {
        self.settings.rates
    }

    /// Merges the given rate changes and persists the settings.
    pub fn set_rates(&mut self, patch: RatesPatch) {
        self.settings.rates.merge(patch);
        self.persist_settings();
    }

    /// Current budget cap, if one is set.
    #[inline]
    #[must_use]
    pub const fn budget_cap(&self) -> Option<f64> {
        self.settings.budget_cap
    }

    /// Sets or clears the budget cap and persists the settings.
    ///
    /// # Errors
    ///
    /// Returns [`SpendbookError::BudgetCap`] for a negative or
    /// non-finite cap; the settings are left untouched.
    pub fn set_budget_cap(&mut self, cap: Option<f64>) -> Result<()> {
        if let Some(value) = cap {
            validate::validate_budget_cap(value).map_err(SpendbookError::BudgetCap)?;
        }
        self.settings.budget_cap = cap;
        self.persist_settings();
        Ok(())
    }

    /// Empties both the collection and the settings, in memory and in
    /// the backing medium.
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.settings = Settings::default();
        if let Err(err) = self.storage.clear() {
            tracing::warn!(%err, "failed to clear storage");
        }
    }

    /// Serializes the collection as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`SpendbookError::Serialization`] if encoding fails.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.transactions).map_err(SpendbookError::from)
    }

    /// Suggested file name for an export, stamped with today's date.
    #[inline]
    #[must_use]
    pub fn export_file_name(&self) -> String {
        format!("spendbook-{}.json", self.clock.now().date_naive())
    }

    /// Replaces the whole collection with the records in a JSON export.
    ///
    /// The payload must be a JSON array; each element must carry a
    /// non-empty `id`, `description` and `category`, a numeric `amount`,
    /// and a `date` in `YYYY-MM-DD` form. This is a shallow shape check,
    /// not field validation; only the date must parse, since the typed
    /// record cannot hold an arbitrary string. Missing timestamps
    /// default to "now". On any failure the existing data is untouched.
    /// Confirming the destructive replacement is the caller's concern.
    ///
    /// Returns the number of imported records.
    ///
    /// # Errors
    ///
    /// Returns [`SpendbookError::Serialization`] for malformed JSON,
    /// [`SpendbookError::ImportNotArray`] for a non-array payload, and
    /// [`SpendbookError::ImportShape`] naming the first offending
    /// record.
    pub fn import_json(&mut self, payload: &str) -> Result<usize> {
        let value: Value = serde_json::from_str(payload)?;
        let Some(records) = value.as_array() else {
            return Err(SpendbookError::ImportNotArray);
        };
        let fallback = self.clock.now();
        let mut imported = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            imported.push(convert_import_record(index, record, fallback)?);
        }
        let count = imported.len();
        self.transactions = imported;
        self.persist_transactions();
        tracing::debug!(count, "import replaced the transaction collection");
        Ok(count)
    }

    /// Returns a reference to the storage backend.
    #[inline]
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    // ── Private helpers ─────────────────────────────────────────────

    /// Writes the collection through to storage, reporting (but
    /// swallowing) failures: the in-memory state stays ahead of the
    /// medium until the next successful save.
    fn persist_transactions(&self) {
        if let Err(err) = self.storage.save_transactions(&self.transactions) {
            tracing::warn!(%err, "failed to persist transactions, in-memory state is unsynced");
        }
    }

    /// Writes the settings through to storage, reporting failures.
    fn persist_settings(&self) {
        if let Err(err) = self.storage.save_settings(&self.settings) {
            tracing::warn!(%err, "failed to persist settings, in-memory state is unsynced");
        }
    }
}

// ── Free-standing helpers ───────────────────────────────────────────────

/// Parses an already-validated amount string.
fn parse_amount(raw: &str) -> Result<f64> {
    raw.parse().map_err(|_err: core::num::ParseFloatError| {
        SpendbookError::Validation(FormErrors {
            amount: Some(FieldError::MalformedAmount),
            ..FormErrors::default()
        })
    })
}

/// Parses an already-validated `YYYY-MM-DD` date string.
fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_err| {
        SpendbookError::Validation(FormErrors {
            date: Some(FieldError::ImpossibleDate),
            ..FormErrors::default()
        })
    })
}

/// Runs the shallow shape check on one import element and converts it.
fn convert_import_record(
    index: usize,
    record: &Value,
    fallback: DateTime<Utc>,
) -> Result<Transaction> {
    let id = non_empty_str(record, "id")
        .ok_or(SpendbookError::ImportShape { index, field: "id" })?;
    let description = non_empty_str(record, "description").ok_or(SpendbookError::ImportShape {
        index,
        field: "description",
    })?;
    let amount = record
        .get("amount")
        .and_then(Value::as_f64)
        .ok_or(SpendbookError::ImportShape {
            index,
            field: "amount",
        })?;
    let category = non_empty_str(record, "category").ok_or(SpendbookError::ImportShape {
        index,
        field: "category",
    })?;
    let date = non_empty_str(record, "date")
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .ok_or(SpendbookError::ImportShape {
            index,
            field: "date",
        })?;
    Ok(Transaction {
        id: TransactionId::new(id.to_owned()),
        description: description.to_owned(),
        amount,
        category: category.to_owned(),
        date,
        created_at: timestamp_field(record, "createdAt").unwrap_or(fallback),
        updated_at: timestamp_field(record, "updatedAt").unwrap_or(fallback),
    })
}

/// Reads a non-empty string field from a JSON object.
fn non_empty_str<'record>(record: &'record Value, field: &str) -> Option<&'record str> {
    record
        .get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Reads an optional RFC 3339 timestamp field.
fn timestamp_field(record: &Value, field: &str) -> Option<DateTime<Utc>> {
    record
        .get(field)
        .and_then(Value::as_str)
        .and_then(|raw| raw.parse().ok())
}
