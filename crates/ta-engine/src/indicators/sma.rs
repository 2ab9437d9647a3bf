//! Simple Moving Average (SMA) indicator.
//!
//! The arithmetic mean of the last `period` values.
//!
//! # Algorithm
//!
//! O(n) rolling sum: the window sum is built once for the first output, then
//! each step adds the entering value and subtracts the leaving one.
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (x[i-period+1] + ... + x[i]) / period
//! ```
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::sma;
//! use ta_engine::validation::IndexRange;
//!
//! let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let out = sma(&data, IndexRange::full(data.len()), 3).unwrap();
//!
//! assert_eq!(out.begin_index(), 2);
//! assert_eq!(out.values(), &[2.0, 3.0, 4.0]);
//! ```

use crate::error::Result;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for SMA: `period - 1`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::sma::sma_lookback;
///
/// assert_eq!(sma_lookback(5), 4);
/// assert_eq!(sma_lookback(1), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for one SMA value: `period`.
#[inline]
#[must_use]
pub const fn sma_min_len(period: usize) -> usize {
    sma_lookback(period) + 1
}

/// Computes the Simple Moving Average over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the SMA output, which should be used"]
pub fn sma<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    let Some(window) = requested.after_lookback(sma_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let divisor = T::from_usize(period)?;
    let mut out = alloc_output(window.count)?;

    let mut trailing = window.begin + 1 - period;
    let mut sum = data[trailing..window.begin]
        .iter()
        .fold(T::zero(), |acc, &x| acc + x);

    for &x in &data[window.begin..=window.end()] {
        sum = sum + x;
        out.push(sum / divisor);
        sum = sum - data[trailing];
        trailing += 1;
    }

    Ok(IndicatorOutput::new(window.begin, out))
}
