//! APO (Absolute Price Oscillator) indicator.
//!
//! The difference between a fast and a slow moving average of the same type.
//!
//! # Formula
//!
//! ```text
//! APO = MA(price, fast_period) - MA(price, slow_period)
//! ```
//!
//! If `slow_period < fast_period` the two are swapped. Both averages are
//! requested over the same range, starting where the slow one first exists.
//!
//! # Lookback
//!
//! The moving-average lookback of the slow period.

use crate::error::Result;
use crate::indicators::ma::{ma, ma_lookback, MaType};
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::validation::{validate_period, validate_series, IndexRange};

/// Computes the lookback period for APO.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::apo::apo_lookback;
/// use ta_engine::indicators::MaType;
///
/// assert_eq!(apo_lookback(12, 26, MaType::Ema), 25);
/// assert_eq!(apo_lookback(26, 12, MaType::Kama), 26);
/// ```
#[inline]
#[must_use]
pub const fn apo_lookback(fast_period: usize, slow_period: usize, ma_type: MaType) -> usize {
    let slow = if slow_period < fast_period {
        fast_period
    } else {
        slow_period
    };
    ma_lookback(slow, ma_type)
}

/// Returns the minimum input length required for one APO value.
#[inline]
#[must_use]
pub const fn apo_min_len(fast_period: usize, slow_period: usize, ma_type: MaType) -> usize {
    apo_lookback(fast_period, slow_period, ma_type) + 1
}

/// Computes the Absolute Price Oscillator over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or a
/// period is zero.
#[must_use = "this returns a Result with the APO output, which should be used"]
pub fn apo<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    fast_period: usize,
    slow_period: usize,
    ma_type: MaType,
) -> Result<IndicatorOutput<T>> {
    let requested = validate_series(range, &[data])?;
    validate_period("fast_period", fast_period, 1)?;
    validate_period("slow_period", slow_period, 1)?;

    let (fast_period, slow_period) = if slow_period < fast_period {
        (slow_period, fast_period)
    } else {
        (fast_period, slow_period)
    };

    let Some(window) = requested.after_lookback(ma_lookback(slow_period, ma_type)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let shared = IndexRange::new(window.begin, window.end());
    let fast = ma(data, shared, fast_period, ma_type)?;
    let slow = ma(data, shared, slow_period, ma_type)?;

    let mut out = alloc_output(slow.element_count())?;
    for (&f, &s) in fast.values_from(slow.begin_index()).iter().zip(slow.values()) {
        out.push(f - s);
    }

    Ok(IndicatorOutput::new(slow.begin_index(), out))
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

    fn sample() -> Vec<f64> {
        (0..60).map(|i| 40.0 + (i as f64 * 0.3).sin() * 3.0).collect()
    }

    #[test]
    fn test_apo_lookback() {
        assert_eq!(apo_lookback(12, 26, MaType::Sma), 25);
        assert_eq!(apo_lookback(3, 10, MaType::Tema), 27);
        assert_eq!(apo_min_len(12, 26, MaType::Ema), 26);
    }

    #[test]
    fn test_apo_ema_difference() {
        let data = sample();
        let out = apo(&data, IndexRange::full(60), 12, 26, MaType::Ema).unwrap();
        assert_eq!(out.begin_index(), 25);

        // both EMAs seeded at 25
        let fast = ma(&data, IndexRange::new(25, 59), 12, MaType::Ema).unwrap();
        let slow = ma(&data, IndexRange::new(25, 59), 26, MaType::Ema).unwrap();
        for j in 0..out.element_count() {
            assert!(approx_eq(
                out.values()[j],
                fast.values()[j] - slow.values()[j],
                1e-12
            ));
        }
    }

    #[test]
    fn test_apo_swaps_periods() {
        let data = sample();
        let a = apo(&data, IndexRange::full(60), 5, 20, MaType::Sma).unwrap();
        let b = apo(&data, IndexRange::full(60), 20, 5, MaType::Sma).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_apo_equal_periods_is_zero() {
        let data = sample();
        let out = apo(&data, IndexRange::full(60), 9, 9, MaType::Wma).unwrap();
        assert!(out.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_apo_rising_prices_positive() {
        let data: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let out = apo(&data, IndexRange::full(40), 3, 10, MaType::Sma).unwrap();
        assert!(out.values().iter().all(|&v| approx_eq(v, 3.5, 1e-10)));
    }

    #[test]
    fn test_apo_warmup_consumes_range() {
        let data = sample();
        let out = apo(&data, IndexRange::new(0, 10), 12, 26, MaType::Ema).unwrap();
        assert!(out.is_empty());
    }
}
