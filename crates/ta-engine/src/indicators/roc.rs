//! Rate of Change (ROC) indicator.
//!
//! # Formula
//!
//! ```text
//! ROC = ((price - price[i - period]) / price[i - period]) × 100
//! ```
//!
//! ROC is 0 when the reference price is zero.
//!
//! # Lookback
//!
//! The lookback period equals `period`.

use crate::error::Result;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::utils::is_zero;
use crate::validation::{validate, IndexRange};

/// Computes the lookback period for ROC.
#[inline]
#[must_use]
pub const fn roc_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length required for one ROC value.
#[inline]
#[must_use]
pub const fn roc_min_len(period: usize) -> usize {
    period + 1
}

/// Computes the Rate of Change over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::roc;
/// use ta_engine::validation::IndexRange;
///
/// let data = [10.0_f64, 11.0, 12.0, 9.0];
/// let out = roc(&data, IndexRange::full(4), 2).unwrap();
///
/// assert_eq!(out.begin_index(), 2);
/// assert!((out.values()[0] - 20.0).abs() < 1e-12);
/// assert!((out.values()[1] - -18.181818181818).abs() < 1e-9);
/// ```
#[must_use = "this returns a Result with the ROC output, which should be used"]
pub fn roc<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    let Some(window) = requested.after_lookback(roc_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let hundred = T::from_usize(100)?;
    let mut out = alloc_output(window.count)?;
    for i in window.begin..=window.end() {
        let base = data[i - period];
        if is_zero(base) {
            out.push(T::zero());
        } else {
            out.push((data[i] - base) / base * hundred);
        }
    }

    Ok(IndicatorOutput::new(window.begin, out))
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
    fn test_roc_lookback() {
        assert_eq!(roc_lookback(10), 10);
        assert_eq!(roc_min_len(10), 11);
    }

    #[test]
    fn test_roc_basic() {
        let data = [100.0_f64, 102.0, 104.0, 103.0, 110.0];
        let out = roc(&data, IndexRange::full(5), 1).unwrap();
        assert_eq!(out.begin_index(), 1);
        assert!(approx_eq(out.values()[0], 2.0, 1e-10));
        assert!(approx_eq(out.values()[3], (110.0 - 103.0) / 103.0 * 100.0, 1e-10));
    }

    #[test]
    fn test_roc_zero_base_is_zero() {
        let data = [0.0_f64, 5.0, 6.0];
        let out = roc(&data, IndexRange::full(3), 1).unwrap();
        assert_eq!(out.values()[0], 0.0);
        assert!(approx_eq(out.values()[1], 20.0, 1e-10));
    }

    #[test]
    fn test_roc_constant_is_zero() {
        let data = [42.0_f64; 12];
        let out = roc(&data, IndexRange::full(12), 5).unwrap();
        assert!(out.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_roc_warmup_consumes_range() {
        let data = [1.0_f64, 2.0, 3.0];
        let out = roc(&data, IndexRange::full(3), 3).unwrap();
        assert!(out.is_empty());
    }
}
