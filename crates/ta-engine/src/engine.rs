//! A uniform compute contract over every indicator.
//!
//! [`Indicator`] is a closed set of indicator configurations. Each variant
//! carries its parameters, and [`Indicator::compute`] runs it against an
//! [`OhlcvSeries`], picking the columns the indicator needs. Callers can hold
//! a heterogeneous list of indicators and treat them alike.
//!
//! The enum deserializes from a tagged JSON object:
//!
//! ```
//! use ta_engine::engine::Indicator;
//!
//! let rsi: Indicator = serde_json::from_str(r#"{"kind":"rsi","period":14}"#).unwrap();
//! assert_eq!(rsi.name(), "RSI");
//! assert_eq!(rsi.lookback(), 14);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::indicators::{
    adx, adx_lookback, apo, apo_lookback, atr, atr_lookback, bollinger, bollinger_lookback, cci,
    cci_lookback, ma, ma_lookback, macd, macd_lookback, mfi, mfi_lookback, min_max,
    min_max_lookback, obv, obv_lookback, price_channel, price_channel_lookback, roc, roc_lookback,
    rsi, rsi_lookback, stoch, stoch_lookback, stochf, stochf_lookback, stochrsi,
    stochrsi_lookback, true_range, true_range_lookback, williams_r, williams_r_lookback, MaType,
};
use crate::ohlcv::{OhlcvSeries, PriceField};
use crate::output::IndicatorOutput;
use crate::traits::SeriesElement;
use crate::validation::IndexRange;

const fn default_apo_ma() -> MaType {
    MaType::Ema
}

const fn default_dev() -> f64 {
    2.0
}

/// An indicator together with its parameters.
///
/// Single-series indicators read the column named by `source` (close by
/// default); the others read the OHLCV columns they are defined on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Indicator {
    /// Moving average of any [`MaType`].
    #[serde(rename = "ma")]
    MovingAverage {
        /// Window length.
        period: usize,
        /// Which average.
        #[serde(default)]
        ma_type: MaType,
        /// Input column.
        #[serde(default)]
        source: PriceField,
    },
    /// Bollinger Bands.
    Bollinger {
        /// Window length, at least 2.
        period: usize,
        /// Upper band distance in standard deviations.
        #[serde(default = "default_dev")]
        nb_dev_up: f64,
        /// Lower band distance in standard deviations.
        #[serde(default = "default_dev")]
        nb_dev_down: f64,
        /// Middle band average.
        #[serde(default)]
        ma_type: MaType,
        /// Input column.
        #[serde(default)]
        source: PriceField,
    },
    /// MACD line, signal and histogram.
    Macd {
        /// Fast EMA period.
        fast_period: usize,
        /// Slow EMA period.
        slow_period: usize,
        /// Signal EMA period.
        signal_period: usize,
        /// Input column.
        #[serde(default)]
        source: PriceField,
    },
    /// Absolute Price Oscillator.
    Apo {
        /// Fast average period.
        fast_period: usize,
        /// Slow average period.
        slow_period: usize,
        /// Average used for both legs.
        #[serde(default = "default_apo_ma")]
        ma_type: MaType,
        /// Input column.
        #[serde(default)]
        source: PriceField,
    },
    /// Relative Strength Index.
    Rsi {
        /// Smoothing period.
        period: usize,
        /// Input column.
        #[serde(default)]
        source: PriceField,
    },
    /// Rate of Change.
    Roc {
        /// Distance to the reference price.
        period: usize,
        /// Input column.
        #[serde(default)]
        source: PriceField,
    },
    /// Rolling minimum and maximum.
    MinMax {
        /// Window length.
        period: usize,
        /// Input column.
        #[serde(default)]
        source: PriceField,
    },
    /// Stochastic RSI.
    #[serde(rename = "stochrsi")]
    StochRsi {
        /// RSI period.
        period: usize,
        /// %K window.
        fast_k_period: usize,
        /// %D period.
        fast_d_period: usize,
        /// %D average.
        #[serde(default)]
        fast_d_ma: MaType,
        /// Input column.
        #[serde(default)]
        source: PriceField,
    },
    /// True Range.
    TrueRange,
    /// Average True Range.
    Atr {
        /// Smoothing period.
        period: usize,
    },
    /// Average Directional Index with +DI and -DI.
    Adx {
        /// Smoothing period.
        period: usize,
    },
    /// Fast stochastic.
    Stochf {
        /// %K window.
        fast_k_period: usize,
        /// %D period.
        fast_d_period: usize,
        /// %D average.
        #[serde(default)]
        fast_d_ma: MaType,
    },
    /// Slow stochastic.
    Stoch {
        /// Raw %K window.
        fast_k_period: usize,
        /// Slow %K smoothing period.
        slow_k_period: usize,
        /// Slow %K average.
        #[serde(default)]
        slow_k_ma: MaType,
        /// Slow %D period.
        slow_d_period: usize,
        /// Slow %D average.
        #[serde(default)]
        slow_d_ma: MaType,
    },
    /// Williams %R.
    WilliamsR {
        /// Window length.
        period: usize,
    },
    /// Commodity Channel Index.
    Cci {
        /// Window length.
        period: usize,
    },
    /// Money Flow Index.
    Mfi {
        /// Window length.
        period: usize,
    },
    /// Highest high / lowest low channel.
    PriceChannel {
        /// Window length.
        period: usize,
    },
    /// On-Balance Volume.
    Obv,
}

impl Indicator {
    /// Short upper-case name, e.g. `"MACD"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MovingAverage { ma_type, .. } => ma_type.name(),
            Self::Bollinger { .. } => "BBANDS",
            Self::Macd { .. } => "MACD",
            Self::Apo { .. } => "APO",
            Self::Rsi { .. } => "RSI",
            Self::Roc { .. } => "ROC",
            Self::MinMax { .. } => "MINMAX",
            Self::StochRsi { .. } => "STOCHRSI",
            Self::TrueRange => "TRANGE",
            Self::Atr { .. } => "ATR",
            Self::Adx { .. } => "ADX",
            Self::Stochf { .. } => "STOCHF",
            Self::Stoch { .. } => "STOCH",
            Self::WilliamsR { .. } => "WILLR",
            Self::Cci { .. } => "CCI",
            Self::Mfi { .. } => "MFI",
            Self::PriceChannel { .. } => "PRICE_CHANNEL",
            Self::Obv => "OBV",
        }
    }

    /// Number of leading input points consumed before the first output.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        match *self {
            Self::MovingAverage { period, ma_type, .. } => ma_lookback(period, ma_type),
            Self::Bollinger { period, ma_type, .. } => bollinger_lookback(period, ma_type),
            Self::Macd {
                fast_period,
                slow_period,
                signal_period,
                ..
            } => macd_lookback(fast_period, slow_period, signal_period),
            Self::Apo {
                fast_period,
                slow_period,
                ma_type,
                ..
            } => apo_lookback(fast_period, slow_period, ma_type),
            Self::Rsi { period, .. } => rsi_lookback(period),
            Self::Roc { period, .. } => roc_lookback(period),
            Self::MinMax { period, .. } => min_max_lookback(period),
            Self::StochRsi {
                period,
                fast_k_period,
                fast_d_period,
                fast_d_ma,
                ..
            } => stochrsi_lookback(period, fast_k_period, fast_d_period, fast_d_ma),
            Self::TrueRange => true_range_lookback(),
            Self::Atr { period } => atr_lookback(period),
            Self::Adx { period } => adx_lookback(period),
            Self::Stochf {
                fast_k_period,
                fast_d_period,
                fast_d_ma,
            } => stochf_lookback(fast_k_period, fast_d_period, fast_d_ma),
            Self::Stoch {
                fast_k_period,
                slow_k_period,
                slow_k_ma,
                slow_d_period,
                slow_d_ma,
            } => stoch_lookback(fast_k_period, slow_k_period, slow_k_ma, slow_d_period, slow_d_ma),
            Self::WilliamsR { period } => williams_r_lookback(period),
            Self::Cci { period } => cci_lookback(period),
            Self::Mfi { period } => mfi_lookback(period),
            Self::PriceChannel { period } => price_channel_lookback(period),
            Self::Obv => obv_lookback(),
        }
    }

    /// Runs the indicator over `range` of `series`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying indicator reports for these inputs and
    /// parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_engine::engine::Indicator;
    /// use ta_engine::indicators::MaType;
    /// use ta_engine::ohlcv::{OhlcvSeries, PriceField};
    /// use ta_engine::validation::IndexRange;
    ///
    /// let close: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    /// let time: Vec<i64> = (0..5).collect();
    /// let series = OhlcvSeries::from_columns(
    ///     time, close.clone(), close.clone(), close.clone(), close, vec![1.0; 5],
    /// ).unwrap();
    ///
    /// let sma = Indicator::MovingAverage {
    ///     period: 3,
    ///     ma_type: MaType::Sma,
    ///     source: PriceField::Close,
    /// };
    /// let out = sma.compute(&series, IndexRange::full(5)).unwrap();
    /// assert_eq!(out.begin_index(), 2);
    /// assert_eq!(out.values(), &[2.0, 3.0, 4.0]);
    /// ```
    #[must_use = "this returns a Result with the indicator output, which should be used"]
    pub fn compute<T: SeriesElement>(
        &self,
        series: &OhlcvSeries<T>,
        range: IndexRange,
    ) -> Result<IndicatorOutput<T>> {
        let out = self.dispatch(series, range);
        match &out {
            Ok(output) => debug!(
                indicator = self.name(),
                lookback = self.lookback(),
                start = range.start,
                end = range.end,
                begin = output.begin_index(),
                count = output.element_count(),
                "computed indicator"
            ),
            Err(err) => debug!(
                indicator = self.name(),
                code = err.code().as_str(),
                error = %err,
                "indicator rejected input"
            ),
        }
        out
    }

    fn dispatch<T: SeriesElement>(
        &self,
        series: &OhlcvSeries<T>,
        range: IndexRange,
    ) -> Result<IndicatorOutput<T>> {
        let (high, low, close, volume) =
            (series.high(), series.low(), series.close(), series.volume());
        match *self {
            Self::MovingAverage {
                period,
                ma_type,
                source,
            } => ma(series.field(source), range, period, ma_type),
            Self::Bollinger {
                period,
                nb_dev_up,
                nb_dev_down,
                ma_type,
                source,
            } => bollinger(
                series.field(source),
                range,
                period,
                T::from_f64(nb_dev_up)?,
                T::from_f64(nb_dev_down)?,
                ma_type,
            ),
            Self::Macd {
                fast_period,
                slow_period,
                signal_period,
                source,
            } => macd(series.field(source), range, fast_period, slow_period, signal_period),
            Self::Apo {
                fast_period,
                slow_period,
                ma_type,
                source,
            } => apo(series.field(source), range, fast_period, slow_period, ma_type),
            Self::Rsi { period, source } => rsi(series.field(source), range, period),
            Self::Roc { period, source } => roc(series.field(source), range, period),
            Self::MinMax { period, source } => min_max(series.field(source), range, period),
            Self::StochRsi {
                period,
                fast_k_period,
                fast_d_period,
                fast_d_ma,
                source,
            } => stochrsi(
                series.field(source),
                range,
                period,
                fast_k_period,
                fast_d_period,
                fast_d_ma,
            ),
            Self::TrueRange => true_range(high, low, close, range),
            Self::Atr { period } => atr(high, low, close, range, period),
            Self::Adx { period } => adx(high, low, close, range, period),
            Self::Stochf {
                fast_k_period,
                fast_d_period,
                fast_d_ma,
            } => stochf(high, low, close, range, fast_k_period, fast_d_period, fast_d_ma),
            Self::Stoch {
                fast_k_period,
                slow_k_period,
                slow_k_ma,
                slow_d_period,
                slow_d_ma,
            } => stoch(
                high,
                low,
                close,
                range,
                fast_k_period,
                slow_k_period,
                slow_k_ma,
                slow_d_period,
                slow_d_ma,
            ),
            Self::WilliamsR { period } => williams_r(high, low, close, range, period),
            Self::Cci { period } => cci(high, low, close, range, period),
            Self::Mfi { period } => mfi(high, low, close, volume, range, period),
            Self::PriceChannel { period } => price_channel(high, low, range, period),
            Self::Obv => obv(close, volume, range),
        }
    }
}
