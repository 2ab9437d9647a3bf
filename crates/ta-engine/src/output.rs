//! The result record shared by every indicator.
//!
//! An [`IndicatorOutput`] holds the absolute input index of its first value,
//! the primary `values` series and any number of named extra series
//! ([`SeriesKey`]). All series share the begin index and element count.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::macd;
//! use ta_engine::output::SeriesKey;
//! use ta_engine::validation::IndexRange;
//!
//! let prices: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
//! let out = macd(&prices, IndexRange::full(prices.len()), 12, 26, 9).unwrap();
//!
//! assert_eq!(out.begin_index(), 33);
//! assert_eq!(out.element_count(), 27);
//! assert_eq!(out.series(SeriesKey::Signal).unwrap().len(), 27);
//! ```

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Names of the secondary series an indicator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKey {
    /// MACD signal line.
    Signal,
    /// MACD histogram.
    #[serde(rename = "hist")]
    Histogram,
    /// Positive directional indicator.
    PlusDi,
    /// Negative directional indicator.
    MinusDi,
    /// Upper band (Bollinger, price channel).
    UpperBand,
    /// Lower band (Bollinger, price channel).
    LowerBand,
    /// Slow stochastic %D.
    SlowD,
    /// Fast stochastic %D.
    FastD,
    /// Rolling maximum of a min/max computation.
    #[serde(rename = "max")]
    Maximum,
}

impl SeriesKey {
    /// The stable name used in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signal => "signal",
            Self::Histogram => "hist",
            Self::PlusDi => "plus_di",
            Self::MinusDi => "minus_di",
            Self::UpperBand => "upper_band",
            Self::LowerBand => "lower_band",
            Self::SlowD => "slow_d",
            Self::FastD => "fast_d",
            Self::Maximum => "max",
        }
    }
}

/// Output of one indicator call.
///
/// Serializes as `{begin_index, element_count, values, extras}`; `extras` is
/// left out when there are none.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorOutput<T> {
    begin_index: usize,
    values: Vec<T>,
    extras: BTreeMap<SeriesKey, Vec<T>>,
}

impl<T: Serialize> Serialize for IndicatorOutput<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let fields = if self.extras.is_empty() { 3 } else { 4 };
        let mut state = serializer.serialize_struct("IndicatorOutput", fields)?;
        state.serialize_field("begin_index", &self.begin_index)?;
        state.serialize_field("element_count", &self.values.len())?;
        state.serialize_field("values", &self.values)?;
        if self.extras.is_empty() {
            state.skip_field("extras")?;
        } else {
            state.serialize_field("extras", &self.extras)?;
        }
        state.end()
    }
}

impl<T: SeriesElement> IndicatorOutput<T> {
    /// Creates an output whose first value belongs to input index `begin_index`.
    #[must_use]
    pub fn new(begin_index: usize, values: Vec<T>) -> Self {
        Self {
            begin_index,
            values,
            extras: BTreeMap::new(),
        }
    }

    /// An output with no values, for ranges consumed entirely by warm-up.
    #[must_use]
    pub fn empty(begin_index: usize) -> Self {
        Self::new(begin_index, Vec::new())
    }

    /// Attaches a named extra series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InternalError` if `values` is not as long as the
    /// primary series.
    pub fn with_series(mut self, key: SeriesKey, values: Vec<T>) -> Result<Self> {
        if values.len() != self.values.len() {
            return Err(Error::InternalError {
                context: "extra series length differs from primary series",
            });
        }
        self.extras.insert(key, values);
        Ok(self)
    }

    /// Absolute input index of the first value.
    #[inline]
    #[must_use]
    pub const fn begin_index(&self) -> usize {
        self.begin_index
    }

    /// Number of values in every series.
    #[inline]
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the warm-up consumed the whole requested range.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Absolute input index of the last value, if there is one.
    #[must_use]
    pub fn end_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.begin_index + self.values.len() - 1)
    }

    /// The primary series.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// A named extra series.
    #[must_use]
    pub fn series(&self, key: SeriesKey) -> Option<&[T]> {
        self.extras.get(&key).map(Vec::as_slice)
    }

    /// Keys of the extra series present, in a stable order.
    pub fn series_keys(&self) -> impl Iterator<Item = SeriesKey> + '_ {
        self.extras.keys().copied()
    }

    /// The primary value computed for absolute input index `index`.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<T> {
        index
            .checked_sub(self.begin_index)
            .and_then(|i| self.values.get(i).copied())
    }

    /// The primary values from absolute input index `index` onwards.
    ///
    /// Empty if `index` lies past the last value; the whole series if it lies
    /// before the first.
    #[must_use]
    pub fn values_from(&self, index: usize) -> &[T] {
        let skip = index
            .saturating_sub(self.begin_index)
            .min(self.values.len());
        &self.values[skip..]
    }

    /// Moves the output `offset` indices later.
    ///
    /// Composite indicators compute an outer stage over the inner stage's
    /// values, whose indices start at 0; this maps them back onto the input.
    #[must_use]
    pub(crate) fn rebase(mut self, offset: usize) -> Self {
        self.begin_index += offset;
        self
    }

    /// Consumes the output, returning the primary series.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Removes and returns a named extra series.
    pub fn take_series(&mut self, key: SeriesKey) -> Option<Vec<T>> {
        self.extras.remove(&key)
    }

    /// The primary series laid out against an input of length `len`,
    /// NaN everywhere no value was produced.
    #[must_use]
    pub fn aligned(&self, len: usize) -> Vec<T> {
        align(self.begin_index, &self.values, len)
    }

    /// A named extra series laid out like [`aligned`](Self::aligned).
    #[must_use]
    pub fn series_aligned(&self, key: SeriesKey, len: usize) -> Option<Vec<T>> {
        self.series(key)
            .map(|values| align(self.begin_index, values, len))
    }
}

fn align<T: SeriesElement>(begin: usize, values: &[T], len: usize) -> Vec<T> {
    let mut out = vec![T::nan(); len];
    if begin < len {
        let n = values.len().min(len - begin);
        out[begin..begin + n].copy_from_slice(&values[..n]);
    }
    out
}

/// Reserves an output buffer for `count` values.
///
/// # Errors
///
/// Returns `Error::AllocError` if the reservation fails.
pub fn alloc_output<T>(count: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(count)
        .map_err(|_| Error::AllocError { requested: count })?;
    Ok(buf)
}
