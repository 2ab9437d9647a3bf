//! Price channel (Donchian Channels) indicator.
//!
//! The price channel tracks the highest high and lowest low over a rolling
//! window. Developed by Richard Donchian, it is commonly used for trend
//! following and breakout strategies.
//!
//! # Algorithm
//!
//! - **Upper Band**: the highest high over the window
//! - **Lower Band**: the lowest low over the window
//! - **Middle**: the average of the two bands
//!
//! ```text
//! Upper  = max(High[i-period+1..=i])
//! Lower  = min(Low[i-period+1..=i])
//! Middle = (Upper + Lower) / 2
//! ```
//!
//! Both extrema come from one pass of monotonic deques, O(n) regardless of
//! `period`.
//!
//! # Interpretation
//!
//! - A close above the prior upper band is a breakout
//! - Channel width tracks volatility
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::price_channel;
//! use ta_engine::output::SeriesKey;
//! use ta_engine::validation::IndexRange;
//!
//! let high = [48.70_f64, 48.72, 48.90, 48.87, 48.82, 49.05, 49.20, 49.35];
//! let low = [47.79_f64, 48.14, 48.39, 48.37, 48.24, 48.64, 48.94, 48.86];
//!
//! let out = price_channel(&high, &low, IndexRange::full(8), 5).unwrap();
//! assert_eq!(out.begin_index(), 4);
//! assert_eq!(out.series(SeriesKey::UpperBand).unwrap()[0], 48.90);
//! assert_eq!(out.series(SeriesKey::LowerBand).unwrap()[0], 47.79);
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::rolling_high_low;
use crate::output::{alloc_output, IndicatorOutput, SeriesKey};
use crate::traits::SeriesElement;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for the price channel: `period - 1`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::donchian::price_channel_lookback;
///
/// assert_eq!(price_channel_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn price_channel_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for one price channel value: `period`.
#[inline]
#[must_use]
pub const fn price_channel_min_len(period: usize) -> usize {
    period
}

/// Computes the price channel over `range`.
///
/// `values` is the middle line; the bands are under [`SeriesKey::UpperBand`]
/// and [`SeriesKey::LowerBand`].
///
/// # Errors
///
/// Returns an error if an input is empty, `high` and `low` differ in length,
/// the range is out of bounds or `period` is zero.
#[must_use = "this returns a Result with the price channel output, which should be used"]
pub fn price_channel<T: SeriesElement>(
    high: &[T],
    low: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[high, low])?;
    let Some(window) = requested.after_lookback(price_channel_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let two = T::from_usize(2)?;
    let (upper, lower) = rolling_high_low(high, low, period, window)?;
    let mut middle = alloc_output(window.count)?;
    middle.extend(upper.iter().zip(&lower).map(|(&u, &l)| (u + l) / two));

    IndicatorOutput::new(window.begin, middle)
        .with_series(SeriesKey::UpperBand, upper)?
        .with_series(SeriesKey::LowerBand, lower)
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
    fn test_price_channel_bands() {
        let high = [5.0_f64, 7.0, 6.0, 4.0, 8.0, 3.0];
        let low = [1.0_f64, 2.0, 0.5, 2.5, 3.0, 1.5];
        let out = price_channel(&high, &low, IndexRange::full(6), 3).unwrap();
        assert_eq!(out.begin_index(), 2);

        let upper = out.series(SeriesKey::UpperBand).unwrap();
        let lower = out.series(SeriesKey::LowerBand).unwrap();
        assert_eq!(upper, &[7.0, 7.0, 8.0, 8.0]);
        assert_eq!(lower, &[0.5, 0.5, 0.5, 1.5]);
        for j in 0..4 {
            assert!(approx_eq(out.values()[j], (upper[j] + lower[j]) / 2.0, 1e-12));
        }
    }

    #[test]
    fn test_price_channel_period_one() {
        let high = [3.0_f64, 4.0, 5.0];
        let low = [1.0_f64, 2.0, 3.0];
        let out = price_channel(&high, &low, IndexRange::full(3), 1).unwrap();
        assert_eq!(out.begin_index(), 0);
        assert_eq!(out.values(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_price_channel_upper_above_lower() {
        let high: Vec<f64> = (0..60).map(|i| 10.0 + (i as f64 * 0.3).sin() + 1.0).collect();
        let low: Vec<f64> = high.iter().map(|h| h - 2.0).collect();
        let out = price_channel(&high, &low, IndexRange::full(60), 20).unwrap();
        let upper = out.series(SeriesKey::UpperBand).unwrap();
        let lower = out.series(SeriesKey::LowerBand).unwrap();
        assert!(upper.iter().zip(lower).all(|(u, l)| u >= l));
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_price_channel_warmup_consumes_range() {
        let x = [1.0_f64; 4];
        let out = price_channel(&x, &x, IndexRange::new(0, 1), 3).unwrap();
        assert!(out.is_empty());
        assert!(out.series(SeriesKey::UpperBand).is_none());
    }

    #[test]
    fn test_price_channel_length_mismatch() {
        assert!(price_channel(&[1.0_f64, 2.0], &[1.0], IndexRange::full(2), 1).is_err());
    }
}
