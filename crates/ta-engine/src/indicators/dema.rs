//! Double Exponential Moving Average (DEMA) indicator.
//!
//! DEMA reduces the lag of a plain EMA by subtracting the EMA of the EMA
//! from twice the EMA.
//!
//! # Algorithm
//!
//! 1. EMA of the input, started `period - 1` indices early so its own EMA is
//!    warmed up by `start`
//! 2. EMA of that EMA series
//! 3. `2 × EMA1 - EMA2` where both are defined
//!
//! # Formula
//!
//! ```text
//! DEMA = 2 × EMA(x, p) - EMA(EMA(x, p), p)
//! ```
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::dema;
//! use ta_engine::validation::IndexRange;
//!
//! let data: Vec<f64> = (1..=10).map(f64::from).collect();
//! let out = dema(&data, IndexRange::full(data.len()), 3).unwrap();
//!
//! // lookback 2 × (period - 1)
//! assert_eq!(out.begin_index(), 4);
//! // a straight line is tracked without lag
//! assert!((out.values()[0] - 5.0).abs() < 1e-10);
//! ```

use crate::error::Result;
use crate::indicators::chain;
use crate::indicators::ema::{ema, ema_lookback};
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for DEMA: `2 × (period - 1)`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::dema::dema_lookback;
///
/// assert_eq!(dema_lookback(3), 4);
/// assert_eq!(dema_lookback(30), 58);
/// ```
#[inline]
#[must_use]
pub const fn dema_lookback(period: usize) -> usize {
    ema_lookback(period) * 2
}

/// Returns the minimum input length for one DEMA value.
#[inline]
#[must_use]
pub const fn dema_min_len(period: usize) -> usize {
    dema_lookback(period) + 1
}

/// Computes the Double Exponential Moving Average over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the DEMA output, which should be used"]
pub fn dema<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    if requested.after_lookback(dema_lookback(period)).is_none() {
        return Ok(IndicatorOutput::empty(range.start));
    }

    let ema1 = ema(data, range.extend_back(ema_lookback(period)), period)?;
    let ema2 = chain(&ema1, |values, r| ema(values, r, period))?;

    let two = T::from_usize(2)?;
    let mut out = alloc_output(ema2.element_count())?;
    for (&e1, &e2) in ema1.values_from(ema2.begin_index()).iter().zip(ema2.values()) {
        out.push(two * e1 - e2);
    }

    Ok(IndicatorOutput::new(ema2.begin_index(), out))
}
