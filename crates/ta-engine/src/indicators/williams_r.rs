//! Williams %R indicator.
//!
//! Williams %R is a momentum oscillator that measures where the close sits
//! within the high-low range of the last `period` bars. It ranges from -100
//! (close at the lowest low) to 0 (close at the highest high).
//!
//! # Formula
//!
//! ```text
//! %R = -100 × (Highest High - Close) / (Highest High - Lowest Low)
//! ```
//!
//! A flat window (`Highest High == Lowest Low`) gives 0.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::williams_r;
//! use ta_engine::validation::IndexRange;
//!
//! let high = [10.0_f64, 12.0, 14.0, 13.0];
//! let low = [8.0_f64, 9.0, 11.0, 10.0];
//! let close = [9.0_f64, 11.0, 14.0, 10.0];
//!
//! let out = williams_r(&high, &low, &close, IndexRange::full(4), 3).unwrap();
//! assert_eq!(out.begin_index(), 2);
//! assert_eq!(out.values()[0], 0.0);
//! assert!((out.values()[1] - -80.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::rolling_high_low;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::utils::is_zero;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for Williams %R: `period - 1`.
#[inline]
#[must_use]
pub const fn williams_r_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for one Williams %R value: `period`.
#[inline]
#[must_use]
pub const fn williams_r_min_len(period: usize) -> usize {
    period
}

/// Computes Williams %R over `range`.
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length, the
/// range is out of bounds or `period` is zero.
#[must_use = "this returns a Result with the Williams %R output, which should be used"]
pub fn williams_r<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[high, low, close])?;
    let Some(window) = requested.after_lookback(williams_r_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let neg_hundred = -T::from_usize(100)?;
    let (highest, lowest) = rolling_high_low(high, low, period, window)?;
    let mut out = alloc_output(window.count)?;
    for (j, (&hh, &ll)) in highest.iter().zip(&lowest).enumerate() {
        let spread = hh - ll;
        if is_zero(spread) {
            out.push(T::zero());
        } else {
            out.push(neg_hundred * (hh - close[window.begin + j]) / spread);
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

    // ==================== Basic Functionality Tests ====================

    #[test]
    fn test_williams_r_lookback() {
        assert_eq!(williams_r_lookback(14), 13);
        assert_eq!(williams_r_lookback(1), 0);
        assert_eq!(williams_r_min_len(14), 14);
    }

    #[test]
    fn test_williams_r_extremes() {
        let high = [10.0_f64, 11.0, 12.0, 12.0];
        let low = [9.0_f64, 10.0, 11.0, 9.0];
        // close at the high, then at the low
        let close = [9.5_f64, 10.5, 12.0, 9.0];
        let out = williams_r(&high, &low, &close, IndexRange::full(4), 3).unwrap();
        assert_eq!(out.values()[0], 0.0);
        assert!(approx_eq(out.values()[1], -100.0, 1e-12));
    }

    #[test]
    fn test_williams_r_flat_window_is_zero() {
        let flat = [7.0_f64; 6];
        let out = williams_r(&flat, &flat, &flat, IndexRange::full(6), 3).unwrap();
        assert!(out.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_williams_r_bounds() {
        let close: Vec<f64> = (0..50).map(|i| 30.0 + (i as f64 * 0.6).sin() * 4.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 1.0).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 1.0).collect();
        let out = williams_r(&high, &low, &close, IndexRange::full(50), 14).unwrap();
        assert!(out.values().iter().all(|&v| (-100.0..=0.0).contains(&v)));
    }

    #[test]
    fn test_williams_r_late_start_reads_prior_window() {
        let high = [10.0_f64, 20.0, 11.0, 12.0, 13.0];
        let low = [9.0_f64, 8.0, 10.0, 11.0, 12.0];
        let close = [9.5_f64, 15.0, 10.5, 11.5, 12.5];
        let out = williams_r(&high, &low, &close, IndexRange::new(3, 4), 3).unwrap();
        assert_eq!(out.begin_index(), 3);
        // window 1..=3 still sees the spike at index 1
        assert!(approx_eq(out.values()[0], -100.0 * (20.0 - 11.5) / 12.0, 1e-12));
    }

    // ==================== Error Handling Tests ====================

    #[test]
    fn test_williams_r_zero_period() {
        let x = [1.0_f64; 5];
        assert!(williams_r(&x, &x, &x, IndexRange::full(5), 0).is_err());
    }

    #[test]
    fn test_williams_r_warmup_consumes_range() {
        let x = [1.0_f64; 5];
        let out = williams_r(&x, &x, &x, IndexRange::new(0, 2), 5).unwrap();
        assert!(out.is_empty());
    }
}
