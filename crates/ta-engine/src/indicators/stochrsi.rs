//! STOCHRSI (Stochastic RSI) indicator.
//!
//! Stochastic RSI applies the fast stochastic formula to RSI values instead
//! of price data, giving a more sensitive momentum reading.
//!
//! # Formula
//!
//! ```text
//! RSI    = RSI(price, period)
//! FastK  = 100 × (RSI - Lowest RSI) / (Highest RSI - Lowest RSI)
//! FastD  = MA(FastK, fast_d)
//! ```
//!
//! The RSI series stands in for high, low and close at once.
//!
//! # Lookback
//!
//! `period + (fast_k - 1) + ma_lookback(fast_d)`: the RSI warm-up followed by
//! the stochastic warm-up.

use crate::error::Result;
use crate::indicators::chain;
use crate::indicators::ma::MaType;
use crate::indicators::rsi::{rsi, rsi_lookback};
use crate::indicators::stochastic::{stochf, stochf_lookback};
use crate::output::IndicatorOutput;
use crate::traits::SeriesElement;
use crate::validation::{validate, validate_period, IndexRange};

/// Computes the lookback period for Stochastic RSI.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::stochrsi::stochrsi_lookback;
/// use ta_engine::indicators::MaType;
///
/// assert_eq!(stochrsi_lookback(14, 14, 3, MaType::Sma), 29);
/// ```
#[inline]
#[must_use]
pub const fn stochrsi_lookback(
    period: usize,
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma: MaType,
) -> usize {
    rsi_lookback(period) + stochf_lookback(fast_k_period, fast_d_period, fast_d_ma)
}

/// Returns the minimum input length required for one Stochastic RSI value.
#[inline]
#[must_use]
pub const fn stochrsi_min_len(
    period: usize,
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma: MaType,
) -> usize {
    stochrsi_lookback(period, fast_k_period, fast_d_period, fast_d_ma) + 1
}

/// Computes Stochastic RSI over `range`.
///
/// `values` is %K of the RSI; %D is under
/// [`SeriesKey::FastD`](crate::output::SeriesKey::FastD).
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or a
/// period is zero. Errors from the RSI stage are returned unchanged.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::{stochrsi, MaType};
/// use ta_engine::validation::IndexRange;
///
/// let data: Vec<f64> = (0..60).map(|i| 50.0 + (i as f64 * 0.4).sin() * 5.0).collect();
/// let out = stochrsi(&data, IndexRange::full(60), 14, 5, 3, MaType::Sma).unwrap();
///
/// assert_eq!(out.begin_index(), 14 + 4 + 2);
/// assert!(out.values().iter().all(|v| (0.0..=100.0).contains(v)));
/// ```
#[must_use = "this returns a Result with the Stochastic RSI output, which should be used"]
pub fn stochrsi<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
    fast_k_period: usize,
    fast_d_period: usize,
    fast_d_ma: MaType,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    validate_period("fast_k_period", fast_k_period, 1)?;
    validate_period("fast_d_period", fast_d_period, 1)?;

    let lookback = stochrsi_lookback(period, fast_k_period, fast_d_period, fast_d_ma);
    let Some(window) = requested.after_lookback(lookback) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let stoch_warmup = stochf_lookback(fast_k_period, fast_d_period, fast_d_ma);
    let inner = rsi(data, IndexRange::new(window.begin - stoch_warmup, window.end()), period)?;
    chain(&inner, |values, r| {
        stochf(values, values, values, r, fast_k_period, fast_d_period, fast_d_ma)
    })
}
