//! Injectable time source.
//!
//! The store never reads the wall clock directly: "now" comes through the
//! [`Clock`] trait so that timestamps and date-relative behavior are
//! deterministic under test.

use chrono::{DateTime, Utc};

/// Supplies "now" for timestamps and export file names.
pub trait Clock: core::fmt::Debug + Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a configured instant.
///
/// Intended for tests and replay scenarios where the passage of time must
/// not influence results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    #[inline]
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
