//! Wilder's smoothing.
//!
//! RSI, ATR and ADX all smooth with factor `1 / period` instead of the
//! `2 / (period + 1)` of a standard EMA. Two recurrences are used:
//!
//! ```text
//! average: avg[i] = (avg[i-1] * (period - 1) + value[i]) / period
//! sum:     sum[i] = sum[i-1] - sum[i-1] / period + value[i]
//! ```
//!
//! The running-sum form is what ADX applies to directional movement and true
//! range before dividing them; the ratio of two such sums equals the ratio of
//! the corresponding averages.

use crate::error::Result;
use crate::traits::SeriesElement;

/// Wilder smoothing coefficients for one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wilder<T> {
    period: T,
    prev_weight: T,
}

impl<T: SeriesElement> Wilder<T> {
    /// Precomputes the factors for `period`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InternalError` if `period` cannot be represented as `T`.
    pub fn new(period: usize) -> Result<Self> {
        let period = T::from_usize(period)?;
        Ok(Self {
            period,
            prev_weight: period - T::one(),
        })
    }

    /// The period as a float, handy for seed averages.
    #[inline]
    #[must_use]
    pub fn period(&self) -> T {
        self.period
    }

    /// One step of the average form.
    #[inline]
    #[must_use]
    pub fn average(&self, prev: T, value: T) -> T {
        (prev * self.prev_weight + value) / self.period
    }

    /// One step of the running-sum form.
    #[inline]
    #[must_use]
    pub fn sum(&self, prev: T, value: T) -> T {
        prev - prev / self.period + value
    }
}
