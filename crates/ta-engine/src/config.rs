//! JSON configuration of indicator sets.
//!
//! A configuration document lists named indicators:
//!
//! ```json
//! {
//!   "indicators": [
//!     { "id": "rsi14", "kind": "rsi", "period": 14 },
//!     { "id": "bb", "kind": "bollinger", "period": 20, "nb_dev_up": 2.5 }
//!   ]
//! }
//! ```
//!
//! Each entry is an `id` plus the fields of one [`Indicator`] variant. Ids must
//! be unique and non-empty.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::Indicator;
use crate::error::{InvalidParameter, Result};

/// A named indicator in a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedIndicator {
    /// Caller-chosen name, unique within its set.
    pub id: String,
    /// The indicator and its parameters.
    #[serde(flatten)]
    pub indicator: Indicator,
}

/// An ordered list of named indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    /// The indicators, in document order.
    pub indicators: Vec<NamedIndicator>,
}

impl IndicatorSet {
    /// Parses and checks a configuration document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter::Config` if the document is not valid JSON,
    /// does not describe an indicator set, or repeats or omits an id.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_engine::config::IndicatorSet;
    ///
    /// let set = IndicatorSet::from_json_str(
    ///     r#"{"indicators":[{"id":"fast","kind":"ma","period":5,"ma_type":"ema"}]}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.get("fast").unwrap().lookback(), 4);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let set: Self =
            serde_json::from_str(json).map_err(|e| InvalidParameter::Config(e.to_string()))?;
        set.check_ids()?;
        debug!(indicators = set.len(), "loaded indicator set");
        Ok(set)
    }

    /// Serializes the set back to JSON.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter::Config` if serialization fails, which only
    /// happens for non-finite band multipliers.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| InvalidParameter::Config(e.to_string()).into())
    }

    /// Appends an indicator under `id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter::Config` if `id` is empty or already used.
    pub fn push(&mut self, id: impl Into<String>, indicator: Indicator) -> Result<()> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidParameter::Config("indicator id is empty".to_string()).into());
        }
        if self.get(&id).is_some() {
            return Err(InvalidParameter::Config(format!("duplicate indicator id `{id}`")).into());
        }
        self.indicators.push(NamedIndicator { id, indicator });
        Ok(())
    }

    /// The indicator named `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Indicator> {
        self.indicators
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.indicator)
    }

    /// Number of indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// The largest lookback in the set: how many leading bars must exist
    /// before every indicator produces output.
    #[must_use]
    pub fn max_lookback(&self) -> usize {
        self.indicators
            .iter()
            .map(|entry| entry.indicator.lookback())
            .max()
            .unwrap_or(0)
    }

    fn check_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.indicators.len());
        for entry in &self.indicators {
            if entry.id.is_empty() {
                return Err(InvalidParameter::Config("indicator id is empty".to_string()).into());
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(InvalidParameter::Config(format!(
                    "duplicate indicator id `{}`",
                    entry.id
                ))
                .into());
            }
        }
        Ok(())
    }
}
