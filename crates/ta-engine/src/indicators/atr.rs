//! Average True Range (ATR) and True Range indicators.
//!
//! The Average True Range is Wilder's volatility measure: a smoothed average
//! of the true range, which extends the bar's high-low range to cover gaps
//! from the previous close.
//!
//! # Algorithm
//!
//! 1. True Range (TR) for each bar, which needs the previous close:
//!    `TR = max(High - Low, |High - Previous Close|, |Low - Previous Close|)`
//! 2. The first ATR is the plain mean of the `period` TR values ending at the
//!    first output
//! 3. Later ATR values use Wilder's smoothing
//!
//! # Formula
//!
//! ```text
//! ATR[begin] = mean(TR[begin-period+1..=begin])
//! ATR[i]     = (ATR[i-1] × (period-1) + TR[i]) / period
//! ```
//!
//! # Gap Handling
//!
//! - A gap up makes `High - Previous Close` the true range
//! - A gap down makes `Previous Close - Low` the true range
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::{atr, true_range};
//! use ta_engine::validation::IndexRange;
//!
//! let high = [10.0_f64, 12.0, 11.0, 13.0];
//! let low = [9.0_f64, 10.0, 9.5, 11.0];
//! let close = [9.5_f64, 11.5, 10.0, 12.5];
//! let range = IndexRange::full(high.len());
//!
//! let tr = true_range(&high, &low, &close, range).unwrap();
//! assert_eq!(tr.begin_index(), 1);
//! assert_eq!(tr.values(), &[2.5, 2.0, 3.0]);
//!
//! let out = atr(&high, &low, &close, range, 3).unwrap();
//! assert_eq!(out.begin_index(), 3);
//! assert!((out.values()[0] - 2.5).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::kernels::wilder::Wilder;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::validation::{validate, validate_series, IndexRange};

/// Returns the lookback period for ATR: `period`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::atr::atr_lookback;
///
/// assert_eq!(atr_lookback(14), 14);
/// ```
#[inline]
#[must_use]
pub const fn atr_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length for one ATR value: `period + 1`.
#[inline]
#[must_use]
pub const fn atr_min_len(period: usize) -> usize {
    atr_lookback(period) + 1
}

/// Returns the lookback period for True Range: 1.
#[inline]
#[must_use]
pub const fn true_range_lookback() -> usize {
    1
}

/// True range of one bar given the previous close.
#[inline]
pub(crate) fn bar_true_range<T: SeriesElement>(high: T, low: T, prev_close: T) -> T {
    let range = high - low;
    let up = (high - prev_close).abs();
    let down = (low - prev_close).abs();
    range.max(up).max(down)
}

/// Computes the True Range over `range`.
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length or the
/// range is out of bounds.
#[must_use = "this returns a Result with the True Range output, which should be used"]
pub fn true_range<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    range: IndexRange,
) -> Result<IndicatorOutput<T>> {
    let requested = validate_series(range, &[high, low, close])?;
    let Some(window) = requested.after_lookback(true_range_lookback()) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let mut out = alloc_output(window.count)?;
    for i in window.begin..=window.end() {
        out.push(bar_true_range(high[i], low[i], close[i - 1]));
    }
    Ok(IndicatorOutput::new(window.begin, out))
}

/// Computes the Average True Range over `range`.
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length, the
/// range is out of bounds or `period` is zero.
#[must_use = "this returns a Result with the ATR output, which should be used"]
pub fn atr<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[high, low, close])?;
    let Some(window) = requested.after_lookback(atr_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let wilder = Wilder::new(period)?;
    let mut out = alloc_output(window.count)?;

    let seed_sum = (window.begin + 1 - period..=window.begin)
        .map(|i| bar_true_range(high[i], low[i], close[i - 1]))
        .fold(T::zero(), |acc, tr| acc + tr);
    let mut prev = seed_sum / wilder.period();
    out.push(prev);

    for i in window.begin + 1..=window.end() {
        prev = wilder.average(prev, bar_true_range(high[i], low[i], close[i - 1]));
        out.push(prev);
    }

    Ok(IndicatorOutput::new(window.begin, out))
}
