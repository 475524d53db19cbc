//! In-memory storage backend.
//!
//! Provides [`InMemoryStorage`], a thread-safe in-memory implementation
//! of the storage trait. Ideal for unit tests and embedders that do not
//! want data to outlive the process.

use std::sync::Mutex;

use crate::error::{Result, SpendbookError};
use crate::models::{Settings, Transaction};

/// Thread-safe in-memory storage.
///
/// # Example
///
/// ```rust
/// use spendbook::storage::InMemoryStorage;
/// use spendbook::store::TransactionStore;
///
/// let mut store = TransactionStore::new(InMemoryStorage::new());
/// store.init();
/// assert!(store.transactions().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    /// All state behind a single mutex for interior mutability.
    inner: Mutex<Inner>,
}

/// Inner mutable state.
#[derive(Debug, Default)]
struct Inner {
    /// Stored transaction collection.
    transactions: Vec<Transaction>,
    /// Stored settings record, if any.
    settings: Option<Settings>,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory storage.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the inner lock and applies a closure.
    fn with_lock<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> Result<R> {
        let mut inner = self.inner.lock().map_err(|err| lock_error(&err))?;
        Ok(f(&mut inner))
    }
}

/// Wraps a mutex poison error.
fn lock_error<T>(err: &std::sync::PoisonError<T>) -> SpendbookError {
    SpendbookError::Storage(err.to_string().into())
}

impl super::Storage for InMemoryStorage {
    #[inline]
    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        self.with_lock(|inner| inner.transactions.clone())
    }

    #[inline]
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.with_lock(|inner| inner.transactions = transactions.to_vec())
    }

    #[inline]
    fn load_settings(&self) -> Result<Option<Settings>> {
        self.with_lock(|inner| inner.settings)
    }

    #[inline]
    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.with_lock(|inner| inner.settings = Some(*settings))
    }

    #[inline]
    fn clear(&self) -> Result<()> {
        self.with_lock(|inner| *inner = Inner::default())
    }
}
