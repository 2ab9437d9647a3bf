//! KAMA (Kaufman Adaptive Moving Average) indicator.
//!
//! KAMA adapts its smoothing to how efficiently price moves: it follows
//! closely while price trends and flattens out while price chops sideways.
//!
//! # Formula
//!
//! ```text
//! ER  = |x[i] - x[i-period]| / Σ|x[j] - x[j-1]|    (j over the last period steps)
//! SC  = (ER × (2/3 - 2/31) + 2/31)²
//! KAMA[i] = KAMA[i-1] + SC × (x[i] - KAMA[i-1])
//! ```
//!
//! The fast and slow constants are fixed at the EMA factors for periods 2
//! and 30. ER is taken as 1 when the path length is zero or does not exceed
//! the signed net change. The recurrence is seeded with the value just
//! before the first output.
//!
//! # Lookback
//!
//! The lookback period is `period`.

use crate::error::Result;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::utils::is_zero;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for KAMA: `period`.
#[inline]
#[must_use]
pub const fn kama_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length for one KAMA value: `period + 1`.
#[inline]
#[must_use]
pub const fn kama_min_len(period: usize) -> usize {
    kama_lookback(period) + 1
}

/// Computes the Kaufman Adaptive Moving Average over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the KAMA output, which should be used"]
pub fn kama<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    let Some(window) = requested.after_lookback(kama_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let two = T::from_usize(2)?;
    let slow = two / T::from_usize(31)?;
    let fast = two / T::from_usize(3)?;
    let const_diff = fast - slow;
    let smoothing = |path: T, change: T| -> T {
        let er = if path <= change || is_zero(path) {
            T::one()
        } else {
            (change / path).abs()
        };
        let sc = er * const_diff + slow;
        sc * sc
    };

    let mut out = alloc_output(window.count)?;

    let mut trailing = window.begin - period;
    let mut path = data[trailing..=window.begin]
        .windows(2)
        .fold(T::zero(), |acc, w| acc + (w[1] - w[0]).abs());

    let mut prev = data[window.begin - 1];
    let x = data[window.begin];
    let mut trailing_value = data[trailing];
    let sc = smoothing(path, x - trailing_value);
    trailing += 1;
    prev = prev + (x - prev) * sc;
    out.push(prev);

    for i in window.begin + 1..=window.end() {
        let x = data[i];
        let leaving = data[trailing];
        path = path - (leaving - trailing_value).abs() + (x - data[i - 1]).abs();
        trailing_value = leaving;
        trailing += 1;

        let sc = smoothing(path, x - leaving);
        prev = prev + (x - prev) * sc;
        out.push(prev);
    }

    Ok(IndicatorOutput::new(window.begin, out))
}
