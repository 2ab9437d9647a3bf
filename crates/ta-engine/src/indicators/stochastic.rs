//! Stochastic Oscillator indicator.
//!
//! The Stochastic Oscillator is a momentum indicator that compares a security's
//! closing price to its price range over a given period. It oscillates between
//! 0 and 100, where readings above 80 typically indicate overbought conditions
//! and readings below 20 indicate oversold conditions.
//!
//! # Variants
//!
//! - **Fast Stochastic** ([`stochf`]): raw %K and a moving average of it (%D)
//! - **Slow Stochastic** ([`stoch`]): %K smoothed once more before %D is taken
//!
//! # Algorithm
//!
//! Highest high and lowest low come from O(n) monotonic-deque rolling extrema.
//!
//! ```text
//! %K      = 100 × (Close - Lowest Low) / (Highest High - Lowest Low)
//! Fast %D = MA(%K, fast_d)
//! Slow %K = MA(%K, slow_k)
//! Slow %D = MA(Slow %K, slow_d)
//! ```
//!
//! A flat window (`Highest High == Lowest Low`) gives %K = 0.
//!
//! Every line is reported from the first index where the last smoothing
//! stage exists, so %K and %D always share a begin index.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::{stochf, MaType};
//! use ta_engine::output::SeriesKey;
//! use ta_engine::validation::IndexRange;
//!
//! let high = [10.0_f64, 11.0, 12.0, 11.5, 12.5, 13.0, 12.0, 11.0, 10.5, 11.5];
//! let low = [9.0_f64, 10.0, 11.0, 10.5, 11.5, 12.0, 11.0, 10.0, 9.5, 10.5];
//! let close = [9.5_f64, 10.5, 11.5, 11.0, 12.0, 12.5, 11.5, 10.5, 10.0, 11.0];
//!
//! let out = stochf(&high, &low, &close, IndexRange::full(10), 5, 3, MaType::Sma).unwrap();
//!
//! // (5 - 1) for %K, then (3 - 1) for %D
//! assert_eq!(out.begin_index(), 6);
//! assert_eq!(out.element_count(), 4);
//! assert!(out.series(SeriesKey::FastD).is_some());
//! ```

use crate::error::Result;
use crate::indicators::chain;
use crate::indicators::ma::{ma, ma_lookback, MaType};
use crate::kernels::rolling_extrema::rolling_high_low;
use crate::output::{alloc_output, IndicatorOutput, SeriesKey};
use crate::traits::SeriesElement;
use crate::utils::is_zero;
use crate::validation::{validate, validate_period, validate_series, IndexRange};

/// Returns the lookback period for the fast stochastic.
///
/// `(fast_k - 1) + ma_lookback(fast_d)`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::stochastic::stochf_lookback;
/// use ta_engine::indicators::MaType;
///
/// assert_eq!(stochf_lookback(5, 3, MaType::Sma), 6);
/// assert_eq!(stochf_lookback(14, 1, MaType::Sma), 13);
/// ```
#[inline]
#[must_use]
pub const fn stochf_lookback(
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma: MaType,
) -> usize {
    fast_k_period.saturating_sub(1) + ma_lookback(fast_d_period, fast_d_ma)
}

/// Returns the minimum input length for one fast stochastic value.
#[inline]
#[must_use]
pub const fn stochf_min_len(
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma: MaType,
) -> usize {
    stochf_lookback(fast_k_period, fast_d_period, fast_d_ma) + 1
}

/// Returns the lookback period for the slow stochastic.
///
/// `(fast_k - 1) + ma_lookback(slow_k) + ma_lookback(slow_d)`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::stochastic::stoch_lookback;
/// use ta_engine::indicators::MaType;
///
/// assert_eq!(stoch_lookback(5, 3, MaType::Sma, 3, MaType::Sma), 8);
/// assert_eq!(stoch_lookback(14, 3, MaType::Ema, 3, MaType::Ema), 17);
/// ```
#[inline]
#[must_use]
pub const fn stoch_lookback(
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma: MaType,
    slow_d_period: usize,
    slow_d_ma: MaType,
) -> usize {
    fast_k_period.saturating_sub(1)
        + ma_lookback(slow_k_period, slow_k_ma)
        + ma_lookback(slow_d_period, slow_d_ma)
}

/// Returns the minimum input length for one slow stochastic value.
#[inline]
#[must_use]
pub const fn stoch_min_len(
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma: MaType,
    slow_d_period: usize,
    slow_d_ma: MaType,
) -> usize {
    stoch_lookback(fast_k_period, slow_k_period, slow_k_ma, slow_d_period, slow_d_ma) + 1
}

/// Raw %K over `range`, beginning at `max(start, period - 1)`.
fn percent_k<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[high, low, close])?;
    let Some(window) = requested.after_lookback(period - 1) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let hundred = T::from_usize(100)?;
    let (highest, lowest) = rolling_high_low(high, low, period, window)?;
    let mut out = alloc_output(window.count)?;
    for (j, (&hh, &ll)) in highest.iter().zip(&lowest).enumerate() {
        let spread = hh - ll;
        if is_zero(spread) {
            out.push(T::zero());
        } else {
            out.push(hundred * (close[window.begin + j] - ll) / spread);
        }
    }
    Ok(IndicatorOutput::new(window.begin, out))
}

/// Computes the fast stochastic over `range`.
///
/// `values` is %K; %D is under [`SeriesKey::FastD`].
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length, the
/// range is out of bounds or a period is zero.
#[must_use = "this returns a Result with the stochastic output, which should be used"]
pub fn stochf<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    range: IndexRange,
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma: MaType,
) -> Result<IndicatorOutput<T>> {
    let requested = validate_series(range, &[high, low, close])?;
    validate_period("fast_k_period", fast_k_period, 1)?;
    validate_period("fast_d_period", fast_d_period, 1)?;

    let lookback = stochf_lookback(fast_k_period, fast_d_period, fast_d_ma);
    let Some(window) = requested.after_lookback(lookback) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let k_range = IndexRange::new(
        window.begin - ma_lookback(fast_d_period, fast_d_ma),
        window.end(),
    );
    let k = percent_k(high, low, close, k_range, fast_k_period)?;
    let d = chain(&k, |values, r| ma(values, r, fast_d_period, fast_d_ma))?;

    let begin = d.begin_index();
    IndicatorOutput::new(begin, k.values_from(begin).to_vec())
        .with_series(SeriesKey::FastD, d.into_values())
}

/// Computes the slow stochastic over `range`.
///
/// `values` is slow %K; slow %D is under [`SeriesKey::SlowD`].
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length, the
/// range is out of bounds or a period is zero.
#[allow(clippy::too_many_arguments)]
#[must_use = "this returns a Result with the stochastic output, which should be used"]
pub fn stoch<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    range: IndexRange,
    fast_k_period: usize,
    slow_k_period: usize,
    slow_k_ma: MaType,
    slow_d_period: usize,
    slow_d_ma: MaType,
) -> Result<IndicatorOutput<T>> {
    let requested = validate_series(range, &[high, low, close])?;
    validate_period("fast_k_period", fast_k_period, 1)?;
    validate_period("slow_k_period", slow_k_period, 1)?;
    validate_period("slow_d_period", slow_d_period, 1)?;

    let lookback =
        stoch_lookback(fast_k_period, slow_k_period, slow_k_ma, slow_d_period, slow_d_ma);
    let Some(window) = requested.after_lookback(lookback) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let smoothing = ma_lookback(slow_k_period, slow_k_ma) + ma_lookback(slow_d_period, slow_d_ma);
    let k = percent_k(
        high,
        low,
        close,
        IndexRange::new(window.begin - smoothing, window.end()),
        fast_k_period,
    )?;
    let slow_k = chain(&k, |values, r| ma(values, r, slow_k_period, slow_k_ma))?;
    let slow_d = chain(&slow_k, |values, r| ma(values, r, slow_d_period, slow_d_ma))?;

    let begin = slow_d.begin_index();
    IndicatorOutput::new(begin, slow_k.values_from(begin).to_vec())
        .with_series(SeriesKey::SlowD, slow_d.into_values())
}
