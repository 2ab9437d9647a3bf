//! CCI (Commodity Channel Index) indicator.
//!
//! The Commodity Channel Index measures how far the typical price has moved
//! from its moving average, in units of mean absolute deviation.
//!
//! # Formula
//!
//! ```text
//! Typical Price = (High + Low + Close) / 3
//! CCI = (TP - SMA(TP, period)) / (0.015 × Mean Deviation)
//! ```
//!
//! Mean Deviation is the average absolute distance of the window's typical
//! prices from their mean. CCI is 0 when the current typical price equals the
//! mean or the mean deviation is zero.
//!
//! # Interpretation
//!
//! - CCI > +100: Overbought, potential selling opportunity
//! - CCI < -100: Oversold, potential buying opportunity
//!
//! # Lookback
//!
//! The lookback period is `period - 1`.

use crate::error::Result;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::utils::is_zero;
use crate::validation::{validate, IndexRange};

/// Lambert's scaling constant.
const CCI_SCALE: f64 = 0.015;

/// Computes the lookback period for CCI.
#[inline]
#[must_use]
pub const fn cci_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length required for one CCI value.
#[inline]
#[must_use]
pub const fn cci_min_len(period: usize) -> usize {
    period
}

/// Computes the Commodity Channel Index over `range`.
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length, the
/// range is out of bounds or `period` is zero.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::cci;
/// use ta_engine::validation::IndexRange;
///
/// let high = [11.0_f64, 12.0, 13.0, 14.0];
/// let low = [9.0_f64, 10.0, 11.0, 12.0];
/// let close = [10.0_f64, 11.0, 12.0, 13.0];
///
/// let out = cci(&high, &low, &close, IndexRange::full(4), 3).unwrap();
/// assert_eq!(out.begin_index(), 2);
/// // TP = 10, 11, 12: (12 - 11) / (0.015 × 2/3) = 100
/// assert!((out.values()[0] - 100.0).abs() < 1e-9);
/// ```
#[must_use = "this returns a Result with the CCI output, which should be used"]
pub fn cci<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[high, low, close])?;
    let Some(window) = requested.after_lookback(cci_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let three = T::from_usize(3)?;
    let scale = T::from_f64(CCI_SCALE)?;
    let n = T::from_usize(period)?;
    let typical = |i: usize| (high[i] + low[i] + close[i]) / three;

    let first = window.begin - cci_lookback(period);
    let mut tp = alloc_output(window.end() + 1 - first)?;
    tp.extend((first..=window.end()).map(typical));

    let mut out = alloc_output(window.count)?;
    for tp_window in tp.windows(period) {
        let avg = tp_window.iter().fold(T::zero(), |acc, &v| acc + v) / n;
        let mean_dev = tp_window
            .iter()
            .fold(T::zero(), |acc, &v| acc + (v - avg).abs())
            / n;
        let current = tp_window[period - 1] - avg;
        if is_zero(current) || is_zero(mean_dev) {
            out.push(T::zero());
        } else {
            out.push(current / (scale * mean_dev));
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

    fn bars(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let close: Vec<f64> = (0..n).map(|i| 25.0 + (i as f64 * 0.5).sin() * 2.0).collect();
        let high = close.iter().map(|c| c + 0.75).collect();
        let low = close.iter().map(|c| c - 0.5).collect();
        (high, low, close)
    }

    #[test]
    fn test_cci_lookback() {
        assert_eq!(cci_lookback(20), 19);
        assert_eq!(cci_min_len(20), 20);
    }

    #[test]
    fn test_cci_manual_window() {
        let (h, l, c) = bars(30);
        let out = cci(&h, &l, &c, IndexRange::full(30), 5).unwrap();
        assert_eq!(out.begin_index(), 4);
        assert_eq!(out.element_count(), 26);

        let tp: Vec<f64> = (0..30).map(|i| (h[i] + l[i] + c[i]) / 3.0).collect();
        let i = 10;
        let w = &tp[i - 4..=i];
        let avg = w.iter().sum::<f64>() / 5.0;
        let md = w.iter().map(|v| (v - avg).abs()).sum::<f64>() / 5.0;
        let expected = (tp[i] - avg) / (0.015 * md);
        assert!(approx_eq(out.values()[i - 4], expected, 1e-9));
    }

    #[test]
    fn test_cci_flat_is_zero() {
        let x = [3.0_f64; 10];
        let out = cci(&x, &x, &x, IndexRange::full(10), 4).unwrap();
        assert!(out.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_cci_period_one_is_zero() {
        // a single-point window has no deviation
        let (h, l, c) = bars(10);
        let out = cci(&h, &l, &c, IndexRange::full(10), 1).unwrap();
        assert_eq!(out.begin_index(), 0);
        assert!(out.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_cci_late_start() {
        let (h, l, c) = bars(30);
        let full = cci(&h, &l, &c, IndexRange::full(30), 5).unwrap();
        let late = cci(&h, &l, &c, IndexRange::new(12, 20), 5).unwrap();
        assert_eq!(late.begin_index(), 12);
        assert_eq!(late.values(), &full.values()[8..17]);
    }

    #[test]
    fn test_cci_zero_period() {
        let (h, l, c) = bars(10);
        assert!(cci(&h, &l, &c, IndexRange::full(10), 0).is_err());
    }
}
