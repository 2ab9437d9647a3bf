//! Relative Strength Index (RSI) indicator.
//!
//! RSI measures the balance of recent gains against recent losses on a
//! 0 to 100 scale.
//!
//! # Algorithm
//!
//! 1. Average gain and average loss are seeded as plain means over the
//!    `period` price changes ending at the first output
//! 2. Both are then updated with Wilder's smoothing
//!
//! # Formula
//!
//! ```text
//! avg[i] = (avg[i-1] × (period - 1) + value[i]) / period
//! RSI    = 100 - 100 / (1 + avgGain / avgLoss)
//! ```
//!
//! RSI is 100 whenever the average loss is zero, including a flat window.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::rsi;
//! use ta_engine::validation::IndexRange;
//!
//! let rising: Vec<f64> = (0..20).map(f64::from).collect();
//! let out = rsi(&rising, IndexRange::full(rising.len()), 14).unwrap();
//!
//! assert_eq!(out.begin_index(), 14);
//! assert!(out.values().iter().all(|&v| v == 100.0));
//! ```

use crate::error::Result;
use crate::kernels::wilder::Wilder;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::utils::is_zero;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for RSI: `period`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::rsi::rsi_lookback;
///
/// assert_eq!(rsi_lookback(14), 14);
/// ```
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length for one RSI value: `period + 1`.
#[inline]
#[must_use]
pub const fn rsi_min_len(period: usize) -> usize {
    rsi_lookback(period) + 1
}

/// Computes the Relative Strength Index over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the RSI output, which should be used"]
pub fn rsi<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    let Some(window) = requested.after_lookback(rsi_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let wilder = Wilder::new(period)?;
    let hundred = T::from_usize(100)?;
    let mut out = alloc_output(window.count)?;

    let mut avg_gain = T::zero();
    let mut avg_loss = T::zero();
    for w in data[window.begin - period..=window.begin].windows(2) {
        let change = w[1] - w[0];
        if change < T::zero() {
            avg_loss = avg_loss - change;
        } else {
            avg_gain = avg_gain + change;
        }
    }
    avg_gain = avg_gain / wilder.period();
    avg_loss = avg_loss / wilder.period();
    out.push(rsi_value(avg_gain, avg_loss, hundred));

    for i in window.begin + 1..=window.end() {
        let change = data[i] - data[i - 1];
        let (gain, loss) = if change < T::zero() {
            (T::zero(), -change)
        } else {
            (change, T::zero())
        };
        avg_gain = wilder.average(avg_gain, gain);
        avg_loss = wilder.average(avg_loss, loss);
        out.push(rsi_value(avg_gain, avg_loss, hundred));
    }

    Ok(IndicatorOutput::new(window.begin, out))
}

#[inline]
fn rsi_value<T: SeriesElement>(avg_gain: T, avg_loss: T, hundred: T) -> T {
    if is_zero(avg_loss) {
        hundred
    } else {
        hundred - hundred / (T::one() + avg_gain / avg_loss)
    }
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

    /// Wilder's original worked example.
    const WILDER_CLOSES: [f64; 20] = [
        44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61,
        46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
    ];

    // ==================== Lookback Tests ====================

    #[test]
    fn test_rsi_lookback() {
        assert_eq!(rsi_lookback(1), 1);
        assert_eq!(rsi_lookback(14), 14);
        assert_eq!(rsi_min_len(14), 15);
    }

    // ==================== Basic Functionality Tests ====================

    #[test]
    fn test_rsi_reference_values() {
        let out = rsi(&WILDER_CLOSES, IndexRange::full(20), 14).unwrap();
        assert_eq!(out.begin_index(), 14);
        assert_eq!(out.element_count(), 6);
        assert!(approx_eq(out.values()[0], 70.46, 0.01));
        assert!(approx_eq(out.values()[1], 66.25, 0.01));
    }

    #[test]
    fn test_rsi_seed_is_plain_mean() {
        let data = [1.0_f64, 3.0, 2.0, 4.0];
        let out = rsi(&data, IndexRange::full(4), 3).unwrap();
        // gains 2 + 2, loss 1 over three changes
        let rs = (4.0 / 3.0) / (1.0 / 3.0);
        assert!(approx_eq(out.values()[0], 100.0 - 100.0 / (1.0 + rs), 1e-10));
    }

    #[test]
    fn test_rsi_strictly_increasing() {
        let data: Vec<f64> = (0..30).map(|i| 10.0 + i as f64 * 0.5).collect();
        let out = rsi(&data, IndexRange::full(30), 5).unwrap();
        assert!(out.values().iter().all(|&v| v == 100.0));
    }

    #[test]
    fn test_rsi_strictly_decreasing() {
        let data: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        let out = rsi(&data, IndexRange::full(30), 5).unwrap();
        assert!(out.values().iter().all(|&v| approx_eq(v, 0.0, 1e-10)));
    }

    #[test]
    fn test_rsi_flat_is_hundred() {
        let data = [5.0_f64; 10];
        let out = rsi(&data, IndexRange::full(10), 3).unwrap();
        assert!(out.values().iter().all(|&v| v == 100.0));
    }

    #[test]
    fn test_rsi_bounds() {
        let data: Vec<f64> = (0..100).map(|i| (i as f64 * 0.9).sin() * 10.0 + 50.0).collect();
        let out = rsi(&data, IndexRange::full(100), 14).unwrap();
        assert!(out.values().iter().all(|&v| (0.0..=100.0).contains(&v)));
    }

    #[test]
    fn test_rsi_late_start_reseeds() {
        let out = rsi(&WILDER_CLOSES, IndexRange::new(16, 19), 3).unwrap();
        assert_eq!(out.begin_index(), 16);

        // seeded over the changes 13..=16
        let expected = rsi(&WILDER_CLOSES[13..], IndexRange::full(7), 3).unwrap();
        assert_eq!(out.values(), expected.values());
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_rsi_warmup_consumes_range() {
        let out = rsi(&WILDER_CLOSES, IndexRange::new(0, 13), 14).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.begin_index(), 0);
    }

    #[test]
    fn test_rsi_f32() {
        let data: Vec<f32> = (0..10).map(|i| i as f32).collect();
        let out = rsi(&data, IndexRange::full(10), 3).unwrap();
        assert!(approx_eq(out.values()[0], 100.0_f32, 1e-4));
    }
}
