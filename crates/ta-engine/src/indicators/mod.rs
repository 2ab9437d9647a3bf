//! Technical analysis indicators.
//!
//! Every indicator is a pure function over borrowed input slices and an
//! inclusive [`IndexRange`] of requested outputs. It returns an
//! [`IndicatorOutput`] whose `begin_index` accounts for the warm-up the
//! indicator needs, or an [`Error`](crate::error::Error) if the inputs fail
//! validation.
//!
//! # Overview
//!
//! - **Generic**: work with both `f32` and `f64` via
//!   [`SeriesElement`](crate::traits::SeriesElement)
//! - **Range-aware**: warm-up reads input before the requested start when it
//!   exists, so a late start still produces output from the start index
//! - **Composable**: composite indicators run an inner indicator and feed its
//!   valid output to an outer one
//! - **Defined fallbacks**: degenerate arithmetic (flat windows, zero
//!   denominators) yields a documented value, never NaN
//!
//! Each module also exposes `*_lookback` and `*_min_len` const functions.
//!
//! # Indicator Categories
//!
//! ## Moving Averages
//!
//! - [`sma()`], [`ema()`], [`wma()`], [`dema()`], [`tema()`], [`trima()`],
//!   [`kama()`] and the [`ma()`] dispatcher over [`MaType`]
//!
//! ## Momentum
//!
//! - [`rsi()`] - Relative Strength Index
//! - [`macd()`] - MACD line, signal and histogram
//! - [`apo()`] - Absolute Price Oscillator
//! - [`stochf()`] / [`stoch()`] - fast and slow stochastic
//! - [`stochrsi()`] - stochastic of the RSI
//! - [`williams_r()`] - Williams %R
//! - [`cci()`] - Commodity Channel Index
//! - [`roc()`] - Rate of Change
//!
//! ## Trend Strength
//!
//! - [`adx()`] - ADX with +DI and -DI
//!
//! ## Volatility and Channels
//!
//! - [`true_range()`], [`atr()`]
//! - [`bollinger()`] - Bollinger Bands
//! - [`price_channel()`] - highest high / lowest low channel
//! - [`min_max()`] - rolling minimum and maximum
//!
//! ## Volume
//!
//! - [`obv()`] - On-Balance Volume
//! - [`mfi()`] - Money Flow Index
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::{ema, rsi, sma};
//! use ta_engine::validation::IndexRange;
//!
//! let prices = [44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//! let range = IndexRange::full(prices.len());
//!
//! let sma_out = sma(&prices, range, 5).unwrap();
//! let ema_out = ema(&prices, range, 5).unwrap();
//! let rsi_out = rsi(&prices, range, 5).unwrap();
//!
//! assert_eq!(sma_out.begin_index(), 4);
//! assert_eq!(ema_out.begin_index(), 4);
//! assert_eq!(rsi_out.begin_index(), 5);
//! ```

pub mod adx;
pub mod apo;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod dema;
pub mod donchian;
pub mod ema;
pub mod kama;
pub mod ma;
pub mod macd;
pub mod mfi;
pub mod minmax;
pub mod obv;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod stochrsi;
pub mod tema;
pub mod trima;
pub mod williams_r;
pub mod wma;

pub use adx::{adx, adx_lookback};
pub use apo::{apo, apo_lookback};
pub use atr::{atr, atr_lookback, true_range, true_range_lookback};
pub use bollinger::{bollinger, bollinger_lookback};
pub use cci::{cci, cci_lookback};
pub use dema::{dema, dema_lookback};
pub use donchian::{price_channel, price_channel_lookback};
pub use ema::{ema, ema_lookback};
pub use kama::{kama, kama_lookback};
pub use ma::{ma, ma_lookback, MaType};
pub use macd::{macd, macd_lookback};
pub use mfi::{mfi, mfi_lookback};
pub use minmax::{min_max, min_max_lookback};
pub use obv::{obv, obv_lookback};
pub use roc::{roc, roc_lookback};
pub use rsi::{rsi, rsi_lookback};
pub use sma::{sma, sma_lookback};
pub use stochastic::{stoch, stoch_lookback, stochf, stochf_lookback};
pub use stochrsi::{stochrsi, stochrsi_lookback};
pub use tema::{tema, tema_lookback};
pub use trima::{trima, trima_lookback};
pub use williams_r::{williams_r, williams_r_lookback};
pub use wma::{wma, wma_lookback};

use crate::error::Result;
use crate::output::IndicatorOutput;
use crate::traits::SeriesElement;
use crate::validation::IndexRange;

/// Runs `outer` over the values of `inner` and maps the result back onto the
/// input's indices.
///
/// `inner` should already have been computed over a range extended back by
/// the outer warm-up, so the outer output lands on the requested start.
/// An empty `inner` yields an empty output at the same begin index.
pub(crate) fn chain<T, F>(inner: &IndicatorOutput<T>, outer: F) -> Result<IndicatorOutput<T>>
where
    T: SeriesElement,
    F: FnOnce(&[T], IndexRange) -> Result<IndicatorOutput<T>>,
{
    if inner.is_empty() {
        return Ok(IndicatorOutput::empty(inner.begin_index()));
    }
    let out = outer(inner.values(), IndexRange::full(inner.element_count()))?;
    Ok(out.rebase(inner.begin_index()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_chain_rebases_outer_output() {
        let inner = IndicatorOutput::new(10, vec![1.0_f64, 2.0, 3.0, 4.0]);
        let out = chain(&inner, |values, r| sma(values, r, 2)).unwrap();
        assert_eq!(out.begin_index(), 11);
        assert_eq!(out.values(), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_chain_empty_inner() {
        let inner: IndicatorOutput<f64> = IndicatorOutput::empty(7);
        let out = chain(&inner, |values, r| sma(values, r, 2)).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.begin_index(), 7);
    }

    #[test]
    fn test_chain_outer_warmup_consumes_inner() {
        let inner = IndicatorOutput::new(3, vec![1.0_f64, 2.0]);
        let out = chain(&inner, |values, r| sma(values, r, 5)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_chain_propagates_outer_error() {
        let inner = IndicatorOutput::new(0, vec![1.0_f64, 2.0]);
        assert!(chain(&inner, |values, r| sma(values, r, 0)).is_err());
    }
}
