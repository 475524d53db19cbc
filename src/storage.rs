//! Pluggable persistence backends for the transaction store.
//!
//! The [`Storage`] trait is the store's persistence contract: two logical
//! records (the transaction collection and the settings) behind a
//! key-value-style read/write interface. Backends are interchangeable
//! and the store never touches the medium directly, so I/O failure stays
//! isolated from the rest of the system.

#[cfg(feature = "storage-file")]
mod file;
mod memory;

#[cfg(feature = "storage-file")]
pub use file::FileStorage;
pub use memory::InMemoryStorage;

use crate::error::Result;
use crate::models::{Settings, Transaction};

/// Blocking persistence backend for the transaction store.
///
/// Implementations take `&self` and use interior mutability where they
/// hold state. A missing record is not an error: reads fall back to the
/// empty value.
pub trait Storage: core::fmt::Debug + Send + Sync {
    /// Reads the persisted transaction collection.
    ///
    /// Returns an empty collection when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read or decode the
    /// record.
    fn load_transactions(&self) -> Result<Vec<Transaction>>;

    /// Replaces the persisted transaction collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()>;

    /// Reads the persisted settings record.
    ///
    /// Returns `Ok(None)` when no settings have been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to read or decode the
    /// record.
    fn load_settings(&self) -> Result<Option<Settings>>;

    /// Replaces the persisted settings record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Removes both records from the medium.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to write.
    fn clear(&self) -> Result<()>;
}
