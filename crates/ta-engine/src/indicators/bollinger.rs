//! Bollinger Bands indicator.
//!
//! Bollinger Bands are a volatility envelope of three lines:
//! - **Middle Band**: a moving average of the price (SMA by default)
//! - **Upper Band**: Middle Band + `nb_dev_up` × standard deviation
//! - **Lower Band**: Middle Band - `nb_dev_down` × standard deviation
//!
//! # Algorithm
//!
//! 1. The middle band is computed with the selected [`MaType`]
//! 2. The standard deviation of each `period` window comes from a rolling sum
//!    and rolling sum of squares, O(n) overall
//! 3. The bands are offset from the middle by the scaled deviation
//!
//! # Mathematical Conventions
//!
//! - **Population Standard Deviation**: divides by n, not n-1.
//! - **Sum of squares**: a slightly negative variance caused by cancellation
//!   is clamped to zero before the square root.
//!
//! # Formula
//!
//! ```text
//! Middle = MA(price, period)
//! SD     = sqrt(Σx²/n - (Σx/n)²)
//! Upper  = Middle + nb_dev_up × SD
//! Lower  = Middle - nb_dev_down × SD
//! ```
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::{bollinger, MaType};
//! use ta_engine::output::SeriesKey;
//! use ta_engine::validation::IndexRange;
//!
//! let data = [20.0_f64, 21.0, 22.0, 21.5, 22.5, 23.0, 22.0, 21.0, 20.5, 21.5];
//! let out = bollinger(&data, IndexRange::full(data.len()), 5, 2.0, 2.0, MaType::Sma).unwrap();
//!
//! assert_eq!(out.begin_index(), 4);
//! let upper = out.series(SeriesKey::UpperBand).unwrap();
//! let lower = out.series(SeriesKey::LowerBand).unwrap();
//! assert!(upper[0] > out.values()[0] && out.values()[0] > lower[0]);
//! ```

use crate::error::Result;
use crate::indicators::ma::{ma, ma_lookback, MaType};
use crate::output::{alloc_output, IndicatorOutput, SeriesKey};
use crate::traits::SeriesElement;
use crate::validation::{validate, validate_multiplier, validate_period, IndexRange};

/// Returns the lookback period for Bollinger Bands: the middle band's lookback.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::bollinger::bollinger_lookback;
/// use ta_engine::indicators::MaType;
///
/// assert_eq!(bollinger_lookback(20, MaType::Sma), 19);
/// assert_eq!(bollinger_lookback(20, MaType::Dema), 38);
/// ```
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize, ma_type: MaType) -> usize {
    ma_lookback(period, ma_type)
}

/// Returns the minimum input length for one Bollinger value.
#[inline]
#[must_use]
pub const fn bollinger_min_len(period: usize, ma_type: MaType) -> usize {
    bollinger_lookback(period, ma_type) + 1
}

/// Computes Bollinger Bands over `range`.
///
/// `values` is the middle band; the bands are under [`SeriesKey::UpperBand`]
/// and [`SeriesKey::LowerBand`].
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds,
/// `period` is below 2 or a multiplier is not finite.
#[must_use = "this returns a Result with the Bollinger Bands, which should be used"]
pub fn bollinger<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
    nb_dev_up: T,
    nb_dev_down: T,
    ma_type: MaType,
) -> Result<IndicatorOutput<T>> {
    validate(range, period, &[data])?;
    validate_period("period", period, 2)?;
    validate_multiplier("nb_dev_up", nb_dev_up)?;
    validate_multiplier("nb_dev_down", nb_dev_down)?;

    let middle = ma(data, range, period, ma_type)?;
    if middle.is_empty() {
        return Ok(IndicatorOutput::empty(range.start));
    }

    let n = T::from_usize(period)?;
    let begin = middle.begin_index();
    let count = middle.element_count();
    let mut upper = alloc_output(count)?;
    let mut lower = alloc_output(count)?;

    let mut trailing = begin + 1 - period;
    let (mut sum, mut sum_sq) = data[trailing..begin]
        .iter()
        .fold((T::zero(), T::zero()), |(s, q), &x| (s + x, q + x * x));

    for (&x, &mid) in data[begin..begin + count].iter().zip(middle.values()) {
        sum = sum + x;
        sum_sq = sum_sq + x * x;

        let mean = sum / n;
        let variance = sum_sq / n - mean * mean;
        let sd = if variance > T::zero() {
            variance.sqrt()
        } else {
            T::zero()
        };
        upper.push(mid + nb_dev_up * sd);
        lower.push(mid - nb_dev_down * sd);

        let old = data[trailing];
        sum = sum - old;
        sum_sq = sum_sq - old * old;
        trailing += 1;
    }

    middle
        .with_series(SeriesKey::UpperBand, upper)?
        .with_series(SeriesKey::LowerBand, lower)
}
