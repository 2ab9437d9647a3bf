//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA weights recent values geometrically more than older ones and so
//! responds faster to price changes than the SMA.
//!
//! # Algorithm
//!
//! 1. The first output, at `begin = max(start, period - 1)`, is the SMA of the
//!    `period` values ending at `begin`
//! 2. Every following value applies `EMA = x × k + EMA_prev × (1 - k)`
//!
//! Because the seed depends on where the output starts, an EMA requested from
//! a later `start` differs slightly from the tail of a full-range EMA until
//! the seed has decayed.
//!
//! # Formula
//!
//! ```text
//! k = 2 / (period + 1)
//! EMA[begin] = SMA(x[begin-period+1..=begin])
//! EMA[i]     = x[i] × k + EMA[i-1] × (1 - k)
//! ```
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::ema;
//! use ta_engine::validation::IndexRange;
//!
//! let data = [44.0_f64, 44.5, 44.0, 43.5, 44.25, 43.75];
//! let out = ema(&data, IndexRange::full(data.len()), 3).unwrap();
//!
//! assert_eq!(out.begin_index(), 2);
//! assert!((out.values()[0] - 44.166_666_666).abs() < 1e-6);
//! assert!((out.values()[1] - 43.833_333_333).abs() < 1e-6);
//! ```

use crate::error::Result;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for EMA: `period - 1`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::ema::ema_lookback;
///
/// assert_eq!(ema_lookback(5), 4);
/// assert_eq!(ema_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn ema_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for one EMA value: `period`.
#[inline]
#[must_use]
pub const fn ema_min_len(period: usize) -> usize {
    ema_lookback(period) + 1
}

/// Computes the Exponential Moving Average over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the EMA output, which should be used"]
pub fn ema<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    let Some(window) = requested.after_lookback(ema_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let n = T::from_usize(period)?;
    let k = compute_standard_alpha::<T>(period)?;
    let keep = T::one() - k;
    let mut out = alloc_output(window.count)?;

    let seed_start = window.begin + 1 - period;
    let mut prev = data[seed_start..=window.begin]
        .iter()
        .fold(T::zero(), |acc, &x| acc + x)
        / n;
    out.push(prev);

    for &x in &data[window.begin + 1..=window.end()] {
        prev = x * k + prev * keep;
        out.push(prev);
    }

    Ok(IndicatorOutput::new(window.begin, out))
}

/// `2 / (period + 1)`.
fn compute_standard_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    let two = T::from_usize(2)?;
    Ok(two / T::from_usize(period + 1)?)
}
