//! Triangular Moving Average (TRIMA) indicator.
//!
//! TRIMA is an SMA of an SMA, which puts triangular weights on the window:
//! the middle values count most.
//!
//! # Formula
//!
//! ```text
//! inner = period / 2 + 1
//! outer = (period + 1) / 2
//! TRIMA = SMA(SMA(x, inner), outer)
//! ```
//!
//! For odd periods both stages have length `(period + 1) / 2`. The stage
//! lengths always sum to `period + 1`, so the lookback is `period - 1`.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::trima;
//! use ta_engine::validation::IndexRange;
//!
//! let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let out = trima(&data, IndexRange::full(data.len()), 3).unwrap();
//!
//! // weights 1,2,1 over [1,2,3]
//! assert_eq!(out.begin_index(), 2);
//! assert!((out.values()[0] - 2.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::indicators::chain;
use crate::indicators::sma::{sma, sma_lookback};
use crate::output::IndicatorOutput;
use crate::traits::SeriesElement;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for TRIMA: `period - 1`.
#[inline]
#[must_use]
pub const fn trima_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for one TRIMA value: `period`.
#[inline]
#[must_use]
pub const fn trima_min_len(period: usize) -> usize {
    trima_lookback(period) + 1
}

#[inline]
const fn stage_periods(period: usize) -> (usize, usize) {
    (period / 2 + 1, (period + 1) / 2)
}

/// Computes the Triangular Moving Average over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the TRIMA output, which should be used"]
pub fn trima<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    if requested.after_lookback(trima_lookback(period)).is_none() {
        return Ok(IndicatorOutput::empty(range.start));
    }

    let (inner, outer) = stage_periods(period);
    let first = sma(data, range.extend_back(sma_lookback(outer)), inner)?;
    chain(&first, |values, r| sma(values, r, outer))
}
