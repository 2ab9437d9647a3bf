//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let prices = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let range = IndexRange::full(prices.len());
//!
//! let sma_out = sma(&prices, range, 3).unwrap();
//! let ema_out = ema(&prices, range, 3).unwrap();
//! let bands = bollinger(&prices, range, 5, 2.0, 2.0, MaType::Sma).unwrap();
//!
//! assert_eq!(sma_out.begin_index(), ema_out.begin_index());
//! assert!(bands.series(SeriesKey::UpperBand).is_some());
//! ```
//!
//! # Contents
//!
//! - Errors: [`Error`], [`ErrorCode`], [`InvalidParameter`], [`Result`]
//! - Traits: [`SeriesElement`], [`ValidatedInput`]
//! - Indexing and output: [`IndexRange`], [`IndicatorOutput`], [`SeriesKey`]
//! - Every indicator function and its `*_lookback`
//! - The engine surface: [`Indicator`], [`IndicatorSet`], [`BatchProcessor`],
//!   [`Candle`], [`OhlcvSeries`], [`PriceField`]

// Error types
pub use crate::error::{Error, ErrorCode, InvalidParameter, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Indexing and output
pub use crate::output::{IndicatorOutput, SeriesKey};
pub use crate::validation::IndexRange;

// Indicator functions
pub use crate::indicators::{
    adx, apo, atr, bollinger, cci, dema, ema, kama, ma, macd, mfi, min_max, obv, price_channel,
    roc, rsi, sma, stoch, stochf, stochrsi, tema, trima, true_range, williams_r, wma, MaType,
};

// Lookback functions
pub use crate::indicators::{
    adx_lookback, apo_lookback, atr_lookback, bollinger_lookback, cci_lookback, dema_lookback,
    ema_lookback, kama_lookback, ma_lookback, macd_lookback, mfi_lookback, min_max_lookback,
    obv_lookback, price_channel_lookback, roc_lookback, rsi_lookback, sma_lookback,
    stoch_lookback, stochf_lookback, stochrsi_lookback, tema_lookback, trima_lookback,
    true_range_lookback, williams_r_lookback, wma_lookback,
};

// Engine surface
pub use crate::batch::BatchProcessor;
pub use crate::config::IndicatorSet;
pub use crate::engine::Indicator;
pub use crate::ohlcv::{Candle, OhlcvSeries, PriceField};
