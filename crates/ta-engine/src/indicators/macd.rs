//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! The MACD is a trend-following momentum indicator built from two EMAs of
//! the price. It consists of three components:
//!
//! - **MACD Line**: fast EMA minus slow EMA
//! - **Signal Line**: an EMA of the MACD line
//! - **Histogram**: MACD line minus signal line
//!
//! # Algorithm
//!
//! 1. Both EMAs start at the same index, `signal_period - 1` before the first
//!    output, so the signal EMA is warmed up by then
//! 2. MACD Line = Fast EMA - Slow EMA
//! 3. Signal Line = EMA(MACD Line, `signal_period`)
//! 4. Histogram = MACD Line - Signal Line
//!
//! All three series are reported from the first index where the signal
//! exists. If `slow_period < fast_period` the two are swapped.
//!
//! # Formula
//!
//! ```text
//! MACD[i]   = EMA(fast)[i] - EMA(slow)[i]
//! Signal[i] = EMA(MACD, signal)[i]
//! Hist[i]   = MACD[i] - Signal[i]
//! lookback  = (slow - 1) + (signal - 1)
//! ```
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::macd;
//! use ta_engine::output::SeriesKey;
//! use ta_engine::validation::IndexRange;
//!
//! let data: Vec<f64> = (0..40).map(|i| 26.0 + (i as f64 * 0.25)).collect();
//! let out = macd(&data, IndexRange::full(data.len()), 12, 26, 9).unwrap();
//!
//! assert_eq!(out.begin_index(), 33);
//! assert_eq!(out.element_count(), 7);
//! assert!(out.series(SeriesKey::Histogram).is_some());
//!
//! // fewer than 34 points: nothing survives the warm-up
//! let short = macd(&data[..33], IndexRange::full(33), 12, 26, 9).unwrap();
//! assert!(short.is_empty());
//! ```

use crate::error::Result;
use crate::indicators::chain;
use crate::indicators::ema::{ema, ema_lookback};
use crate::output::{alloc_output, IndicatorOutput, SeriesKey};
use crate::traits::SeriesElement;
use crate::validation::{validate_period, validate_series, IndexRange};

/// Returns the lookback period for MACD: `(slow - 1) + (signal - 1)`.
///
/// The fast and slow periods are ordered first, as in [`macd`].
///
/// # Example
///
/// ```
/// use ta_engine::indicators::macd::macd_lookback;
///
/// assert_eq!(macd_lookback(12, 26, 9), 33);
/// assert_eq!(macd_lookback(26, 12, 9), 33);
/// ```
#[inline]
#[must_use]
pub const fn macd_lookback(fast_period: usize, slow_period: usize, signal_period: usize) -> usize {
    let slow = if slow_period < fast_period {
        fast_period
    } else {
        slow_period
    };
    ema_lookback(slow) + ema_lookback(signal_period)
}

/// Returns the minimum input length for one MACD value.
#[inline]
#[must_use]
pub const fn macd_min_len(fast_period: usize, slow_period: usize, signal_period: usize) -> usize {
    macd_lookback(fast_period, slow_period, signal_period) + 1
}

/// Computes MACD over `range`.
///
/// `values` is the MACD line; the signal line and histogram are under
/// [`SeriesKey::Signal`] and [`SeriesKey::Histogram`].
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or any
/// period is zero.
#[must_use = "this returns a Result with the MACD output, which should be used"]
pub fn macd<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate_series(range, &[data])?;
    validate_period("fast_period", fast_period, 1)?;
    validate_period("slow_period", slow_period, 1)?;
    validate_period("signal_period", signal_period, 1)?;

    let (fast_period, slow_period) = if slow_period < fast_period {
        (slow_period, fast_period)
    } else {
        (fast_period, slow_period)
    };

    let lookback = macd_lookback(fast_period, slow_period, signal_period);
    let Some(window) = requested.after_lookback(lookback) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    // Both EMAs seed at the same index so their difference is aligned.
    let line_range = IndexRange::new(window.begin - ema_lookback(signal_period), window.end());
    let fast = ema(data, line_range, fast_period)?;
    let slow = ema(data, line_range, slow_period)?;

    let mut line = alloc_output(slow.element_count())?;
    for (&f, &s) in fast.values_from(slow.begin_index()).iter().zip(slow.values()) {
        line.push(f - s);
    }
    let line = IndicatorOutput::new(slow.begin_index(), line);

    let signal = chain(&line, |values, r| ema(values, r, signal_period))?;
    let begin = signal.begin_index();

    let macd_line = line.values_from(begin).to_vec();
    let mut hist = alloc_output(signal.element_count())?;
    for (&m, &s) in macd_line.iter().zip(signal.values()) {
        hist.push(m - s);
    }

    IndicatorOutput::new(begin, macd_line)
        .with_series(SeriesKey::Signal, signal.into_values())?
        .with_series(SeriesKey::Histogram, hist)
}
