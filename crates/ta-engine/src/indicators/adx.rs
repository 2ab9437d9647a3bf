//! Average Directional Index (ADX) indicator.
//!
//! The Average Directional Index measures trend strength regardless of
//! direction. The directional indicators +DI and -DI that feed it are
//! reported alongside.
//!
//! # Algorithm
//!
//! 1. Directional movement (+DM, -DM) and true range for each bar
//! 2. Running Wilder sums of +DM, -DM and TR, seeded from `period - 1` bars
//! 3. +DI and -DI from the smoothed sums, then DX from the DIs
//! 4. The first ADX is the mean of the first `period` DX values; later ADX
//!    values use Wilder's smoothing
//!
//! # Formula
//!
//! ```text
//! up   = High[i] - High[i-1]
//! down = Low[i-1] - Low[i]
//! +DM  = up   if up > 0 and up > down, else 0
//! -DM  = down if down > 0 and down > up, else 0
//!
//! +DI = 100 × Smoothed(+DM) / Smoothed(TR)
//! -DI = 100 × Smoothed(-DM) / Smoothed(TR)
//! DX  = 100 × |+DI - -DI| / (+DI + -DI)
//! ADX = Wilder smoothing of DX
//! ```
//!
//! # Degenerate Bars
//!
//! - A zero smoothed TR gives DIs of 0
//! - A bar whose TR or DI sum is zero produces no DX: ADX keeps its previous
//!   value, and during the seed the bar contributes nothing to the DX sum
//!
//! # Lookback
//!
//! `2 × period - 1`: `period` bars to build the smoothed DM/TR, then
//! `period - 1` more to average DX.
//!
//! # Output
//!
//! `values` is ADX; +DI and -DI are under [`SeriesKey::PlusDi`] and
//! [`SeriesKey::MinusDi`].
//!
//! # Interpretation
//!
//! - ADX < 20: Weak trend or range-bound market
//! - ADX > 40: Strong trend
//! - +DI > -DI: Bullish directional movement

use crate::error::Result;
use crate::indicators::atr::bar_true_range;
use crate::kernels::wilder::Wilder;
use crate::output::{alloc_output, IndicatorOutput, SeriesKey};
use crate::traits::SeriesElement;
use crate::utils::is_zero;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for ADX: `2 × period - 1`.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::adx::adx_lookback;
///
/// assert_eq!(adx_lookback(14), 27);
/// assert_eq!(adx_lookback(1), 1);
/// ```
#[inline]
#[must_use]
pub const fn adx_lookback(period: usize) -> usize {
    (period * 2).saturating_sub(1)
}

/// Returns the minimum input length for one ADX value: `2 × period`.
#[inline]
#[must_use]
pub const fn adx_min_len(period: usize) -> usize {
    adx_lookback(period) + 1
}

/// (+DM, -DM) of a bar against the previous bar.
#[inline]
fn directional_movement<T: SeriesElement>(high: T, low: T, prev_high: T, prev_low: T) -> (T, T) {
    let up = high - prev_high;
    let down = prev_low - low;
    if down > T::zero() && up < down {
        (T::zero(), down)
    } else if up > T::zero() && up > down {
        (up, T::zero())
    } else {
        (T::zero(), T::zero())
    }
}

/// Running Wilder sums of +DM, -DM and TR.
struct DirectionalState<T> {
    plus_dm: T,
    minus_dm: T,
    tr: T,
}

impl<T: SeriesElement> DirectionalState<T> {
    /// (+DI, -DI, DX). DX is `None` when a denominator is zero.
    fn indicators(&self, hundred: T) -> (T, T, Option<T>) {
        if is_zero(self.tr) {
            return (T::zero(), T::zero(), None);
        }
        let plus_di = hundred * self.plus_dm / self.tr;
        let minus_di = hundred * self.minus_dm / self.tr;
        let total = plus_di + minus_di;
        let dx = (!is_zero(total)).then(|| hundred * (plus_di - minus_di).abs() / total);
        (plus_di, minus_di, dx)
    }
}

/// Computes the Average Directional Index over `range`.
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length, the
/// range is out of bounds or `period` is zero.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::adx;
/// use ta_engine::output::SeriesKey;
/// use ta_engine::validation::IndexRange;
///
/// let high: Vec<f64> = (0..30).map(|i| 10.0 + i as f64).collect();
/// let low: Vec<f64> = high.iter().map(|h| h - 1.0).collect();
/// let close: Vec<f64> = high.iter().map(|h| h - 0.5).collect();
///
/// let out = adx(&high, &low, &close, IndexRange::full(30), 5).unwrap();
/// assert_eq!(out.begin_index(), 9);
/// // a clean uptrend: all movement is positive
/// assert!((out.values()[0] - 100.0).abs() < 1e-9);
/// assert_eq!(out.series(SeriesKey::MinusDi).unwrap()[0], 0.0);
/// ```
#[must_use = "this returns a Result with the ADX output, which should be used"]
pub fn adx<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[high, low, close])?;
    let Some(window) = requested.after_lookback(adx_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let wilder = Wilder::new(period)?;
    let hundred = T::from_usize(100)?;
    let mut adx_out = alloc_output(window.count)?;
    let mut plus_out = alloc_output(window.count)?;
    let mut minus_out = alloc_output(window.count)?;

    let mut today = window.begin - adx_lookback(period);
    let mut state = DirectionalState {
        plus_dm: T::zero(),
        minus_dm: T::zero(),
        tr: T::zero(),
    };

    // Seed the running sums with period - 1 plain bars.
    for _ in 1..period {
        today += 1;
        let (plus, minus) =
            directional_movement(high[today], low[today], high[today - 1], low[today - 1]);
        state.plus_dm = state.plus_dm + plus;
        state.minus_dm = state.minus_dm + minus;
        state.tr = state.tr + bar_true_range(high[today], low[today], close[today - 1]);
    }

    let step = |state: &mut DirectionalState<T>, i: usize| {
        let (plus, minus) = directional_movement(high[i], low[i], high[i - 1], low[i - 1]);
        state.plus_dm = wilder.sum(state.plus_dm, plus);
        state.minus_dm = wilder.sum(state.minus_dm, minus);
        state.tr = wilder.sum(state.tr, bar_true_range(high[i], low[i], close[i - 1]));
        state.indicators(hundred)
    };

    let mut dx_sum = T::zero();
    let mut last_di = (T::zero(), T::zero());
    for _ in 0..period {
        today += 1;
        let (plus_di, minus_di, dx) = step(&mut state, today);
        if let Some(dx) = dx {
            dx_sum = dx_sum + dx;
        }
        last_di = (plus_di, minus_di);
    }

    let mut adx = dx_sum / wilder.period();
    adx_out.push(adx);
    plus_out.push(last_di.0);
    minus_out.push(last_di.1);

    for i in window.begin + 1..=window.end() {
        let (plus_di, minus_di, dx) = step(&mut state, i);
        if let Some(dx) = dx {
            adx = wilder.average(adx, dx);
        }
        adx_out.push(adx);
        plus_out.push(plus_di);
        minus_out.push(minus_di);
    }

    IndicatorOutput::new(window.begin, adx_out)
        .with_series(SeriesKey::PlusDi, plus_out)?
        .with_series(SeriesKey::MinusDi, minus_out)
}
