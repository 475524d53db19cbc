//! Transaction store and query engine for a client-side personal
//! finance tracker.
//!
//! This crate is the core behind a tracker UI: the authoritative
//! [`store::TransactionStore`] (validated mutations, settings, immediate
//! persistence, import/export), the pure [`search`]/[`sort`]/[`stats`]
//! engines that build views over its data, and the pluggable
//! [`storage::Storage`] persistence contract. The presentation layer,
//! chart rendering, and user-confirmation flows live in the embedder.
//!
//! # Example
//!
//! ```
//! use spendbook::models::TransactionDraft;
//! use spendbook::storage::InMemoryStorage;
//! use spendbook::store::TransactionStore;
//!
//! let mut store = TransactionStore::new(InMemoryStorage::new());
//! store.init();
//! let added = store.add(TransactionDraft {
//!     description: "Weekly groceries".to_owned(),
//!     amount: "5000.50".to_owned(),
//!     category: "Food".to_owned(),
//!     date: "2025-01-15".to_owned(),
//! })?;
//! assert_eq!(added.description, "Weekly groceries");
//! assert_eq!(store.transactions().len(), 1);
//! # Ok::<(), spendbook::error::SpendbookError>(())
//! ```

pub mod clock;
pub mod error;
pub mod models;
pub mod search;
pub mod sort;
pub mod stats;
pub mod storage;
pub mod store;
pub mod validate;
