//! Data models for the transaction store.
//!
//! This module contains the persisted transaction record, the raw input
//! shapes the presentation layer submits (drafts and patches), and the
//! user settings.

mod ids;
mod settings;
mod transaction;

pub use ids::TransactionId;
pub use settings::{Rates, RatesPatch, Settings};
pub use transaction::{Transaction, TransactionDraft, TransactionPatch};
