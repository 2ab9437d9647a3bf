//! Weighted Moving Average (WMA) indicator.
//!
//! Linear weights: the newest value counts `period` times, the oldest once.
//!
//! # Algorithm
//!
//! O(n) with two running sums, a weighted sum and a plain sum of the window:
//! 1. Add the entering value with weight `period` (and to the plain sum)
//! 2. Emit `weighted / divider`
//! 3. Subtract the plain sum from the weighted sum, so every value loses one
//!    unit of weight, and drop the leaving value from the plain sum
//!
//! # Formula
//!
//! ```text
//! WMA = (x[i]×n + x[i-1]×(n-1) + ... + x[i-n+1]×1) / (n×(n+1)/2)
//! ```
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::wma;
//! use ta_engine::validation::IndexRange;
//!
//! let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let out = wma(&data, IndexRange::full(data.len()), 3).unwrap();
//!
//! // (1×1 + 2×2 + 3×3) / 6
//! assert!((out.values()[0] - 14.0 / 6.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for WMA: `period - 1`.
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for one WMA value: `period`.
#[inline]
#[must_use]
pub const fn wma_min_len(period: usize) -> usize {
    wma_lookback(period) + 1
}

/// Computes the Weighted Moving Average over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the WMA output, which should be used"]
pub fn wma<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    let Some(window) = requested.after_lookback(wma_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let weight = T::from_usize(period)?;
    let divider = T::from_usize(period * (period + 1) / 2)?;
    let mut out = alloc_output(window.count)?;

    let mut trailing = window.begin + 1 - period;
    let mut weighted = T::zero();
    let mut plain = T::zero();
    for (w, &x) in data[trailing..window.begin].iter().enumerate() {
        weighted = weighted + x * T::from_usize(w + 1)?;
        plain = plain + x;
    }

    for &x in &data[window.begin..=window.end()] {
        plain = plain + x;
        weighted = weighted + x * weight;
        out.push(weighted / divider);
        weighted = weighted - plain;
        plain = plain - data[trailing];
        trailing += 1;
    }

    Ok(IndicatorOutput::new(window.begin, out))
}
