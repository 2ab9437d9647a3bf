//! Triple Exponential Moving Average (TEMA) indicator.
//!
//! # Formula
//!
//! ```text
//! EMA1 = EMA(x, p)
//! EMA2 = EMA(EMA1, p)
//! EMA3 = EMA(EMA2, p)
//! TEMA = 3 × EMA1 - 3 × EMA2 + EMA3
//! ```
//!
//! Each stage starts `period - 1` indices before the next one needs it, so
//! the lookback is `3 × (period - 1)`.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::tema;
//! use ta_engine::validation::IndexRange;
//!
//! let data: Vec<f64> = (1..=20).map(f64::from).collect();
//! let out = tema(&data, IndexRange::full(data.len()), 3).unwrap();
//! assert_eq!(out.begin_index(), 6);
//! ```

use crate::error::Result;
use crate::indicators::chain;
use crate::indicators::ema::{ema, ema_lookback};
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for TEMA: `3 × (period - 1)`.
#[inline]
#[must_use]
pub const fn tema_lookback(period: usize) -> usize {
    ema_lookback(period) * 3
}

/// Returns the minimum input length for one TEMA value.
#[inline]
#[must_use]
pub const fn tema_min_len(period: usize) -> usize {
    tema_lookback(period) + 1
}

/// Computes the Triple Exponential Moving Average over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the TEMA output, which should be used"]
pub fn tema<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    if requested.after_lookback(tema_lookback(period)).is_none() {
        return Ok(IndicatorOutput::empty(range.start));
    }

    let ema1 = ema(data, range.extend_back(ema_lookback(period) * 2), period)?;
    let ema2 = chain(&ema1, |values, r| ema(values, r, period))?;
    let ema3 = chain(&ema2, |values, r| ema(values, r, period))?;

    let three = T::from_usize(3)?;
    let begin = ema3.begin_index();
    let mut out = alloc_output(ema3.element_count())?;
    let stages = ema1
        .values_from(begin)
        .iter()
        .zip(ema2.values_from(begin))
        .zip(ema3.values());
    for ((&e1, &e2), &e3) in stages {
        out.push(three * e1 - three * e2 + e3);
    }

    Ok(IndicatorOutput::new(begin, out))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use num_traits::Float;

    fn approx_eq<T: Float>(a: T, b: T, epsilon: T) -> bool {
        if a.is_nan() && b.is_nan() {
            return true;
        }
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_tema_lookback() {
        assert_eq!(tema_lookback(1), 0);
        assert_eq!(tema_lookback(3), 6);
        assert_eq!(tema_lookback(10), 27);
        assert_eq!(tema_min_len(10), 28);
    }

    #[test]
    fn test_tema_begin_and_count() {
        let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.2).cos() + 10.0).collect();
        let out = tema(&data, IndexRange::full(50), 6).unwrap();
        assert_eq!(out.begin_index(), 15);
        assert_eq!(out.element_count(), 35);
    }

    #[test]
    fn test_tema_matches_composition() {
        let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.2).cos() + 10.0).collect();
        let p = 4;
        let out = tema(&data, IndexRange::full(50), p).unwrap();

        let e1 = ema(&data, IndexRange::full(50), p).unwrap();
        let e2 = ema(e1.values(), IndexRange::full(e1.element_count()), p).unwrap();
        let e3 = ema(e2.values(), IndexRange::full(e2.element_count()), p).unwrap();
        for (j, &v) in out.values().iter().enumerate() {
            let expected = 3.0 * e1.values()[j + 6] - 3.0 * e2.values()[j + 3] + e3.values()[j];
            assert!(approx_eq(v, expected, 1e-10));
        }
    }

    #[test]
    fn test_tema_linear_has_no_lag() {
        let data: Vec<f64> = (0..40).map(|i| 0.5 * i as f64 - 3.0).collect();
        let out = tema(&data, IndexRange::full(40), 4).unwrap();
        for (j, &v) in out.values().iter().enumerate() {
            assert!(approx_eq(v, data[out.begin_index() + j], 1e-9));
        }
    }

    #[test]
    fn test_tema_warmup_consumes_range() {
        let data = [1.0_f64; 6];
        let out = tema(&data, IndexRange::full(6), 3).unwrap();
        assert!(out.is_empty());
    }
}
