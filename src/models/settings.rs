//! User settings: exchange rates and the budget cap.

use serde::{Deserialize, Serialize};

/// Conversion factors per supported foreign currency (local-currency
/// amount per 1 unit of foreign currency).
///
/// Rates are stored for the presentation layer to display; the core
/// never applies them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rates {
    /// Conversion factor for US dollars.
    pub usd: f64,
    /// Conversion factor for British pounds.
    pub gbp: f64,
}

impl Rates {
    /// Merges the set fields of a patch over the current values.
    #[inline]
    pub fn merge(&mut self, patch: RatesPatch) {
        if let Some(usd) = patch.usd {
            self.usd = usd;
        }
        if let Some(gbp) = patch.gbp {
            self.gbp = gbp;
        }
    }
}

impl Default for Rates {
    #[inline]
    fn default() -> Self {
        Self {
            usd: 0.000_685,
            gbp: 0.000_504,
        }
    }
}

/// Partial update for [`Rates`]; unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatesPatch {
    /// Replacement dollar factor.
    pub usd: Option<f64>,
    /// Replacement pound factor.
    pub gbp: Option<f64>,
}

impl RatesPatch {
    /// Creates an empty patch that changes nothing.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            usd: None,
            gbp: None,
        }
    }

    /// Sets a replacement dollar factor.
    #[inline]
    #[must_use]
    pub const fn usd(mut self, value: f64) -> Self {
        self.usd = Some(value);
        self
    }

    /// Sets a replacement pound factor.
    #[inline]
    #[must_use]
    pub const fn gbp(mut self, value: f64) -> Self {
        self.gbp = Some(value);
        self
    }
}

/// Persisted user settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Exchange rates shown by the presentation layer.
    pub rates: Rates,
    /// Spending ceiling over total spending; `None` when no cap is set.
    pub budget_cap: Option<f64>,
}
