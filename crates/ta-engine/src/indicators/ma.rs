//! Moving-average type selector and dispatcher.
//!
//! Several indicators (Bollinger Bands, APO, the stochastics) let the caller
//! pick which moving average smooths a stage. [`MaType`] names the choice and
//! [`ma`] runs it.
//!
//! Selectors also have a numeric form, `0..=6` in declaration order, for
//! callers that pass the type as an integer.
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::{ma, MaType};
//! use ta_engine::validation::IndexRange;
//!
//! let data: Vec<f64> = (1..=30).map(f64::from).collect();
//! let range = IndexRange::full(data.len());
//!
//! let sma = ma(&data, range, 10, MaType::Sma).unwrap();
//! let dema = ma(&data, range, 10, MaType::Dema).unwrap();
//! assert_eq!(sma.begin_index(), 9);
//! assert_eq!(dema.begin_index(), 18);
//!
//! assert_eq!(MaType::try_from(2).unwrap(), MaType::Wma);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidParameter, Result};
use crate::indicators::{dema, ema, kama, sma, tema, trima, wma};
use crate::output::IndicatorOutput;
use crate::traits::SeriesElement;
use crate::validation::IndexRange;

/// The moving averages that can smooth an indicator stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaType {
    /// Simple Moving Average
    #[default]
    Sma,
    /// Exponential Moving Average
    Ema,
    /// Weighted Moving Average
    Wma,
    /// Double Exponential Moving Average
    Dema,
    /// Triple Exponential Moving Average
    Tema,
    /// Triangular Moving Average
    Trima,
    /// Kaufman Adaptive Moving Average
    Kama,
}

impl MaType {
    /// Every selector, in numeric order.
    pub const ALL: [Self; 7] = [
        Self::Sma,
        Self::Ema,
        Self::Wma,
        Self::Dema,
        Self::Tema,
        Self::Trima,
        Self::Kama,
    ];

    /// Returns the short upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sma => "SMA",
            Self::Ema => "EMA",
            Self::Wma => "WMA",
            Self::Dema => "DEMA",
            Self::Tema => "TEMA",
            Self::Trima => "TRIMA",
            Self::Kama => "KAMA",
        }
    }

    /// Lookback of this moving average for `period`.
    #[must_use]
    pub const fn lookback(self, period: usize) -> usize {
        match self {
            Self::Sma => sma::sma_lookback(period),
            Self::Ema => ema::ema_lookback(period),
            Self::Wma => wma::wma_lookback(period),
            Self::Dema => dema::dema_lookback(period),
            Self::Tema => tema::tema_lookback(period),
            Self::Trima => trima::trima_lookback(period),
            Self::Kama => kama::kama_lookback(period),
        }
    }
}

impl fmt::Display for MaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for MaType {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::InvalidParameter(InvalidParameter::MaType(value)))
    }
}

impl From<MaType> for u32 {
    fn from(value: MaType) -> Self {
        value as Self
    }
}

/// Returns the lookback of `ma_type` for `period`.
///
/// A period of 1 has no lookback for any type except KAMA, which always needs
/// the previous value.
#[inline]
#[must_use]
pub const fn ma_lookback(period: usize, ma_type: MaType) -> usize {
    ma_type.lookback(period)
}

/// Computes the moving average selected by `ma_type` over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
#[must_use = "this returns a Result with the moving average, which should be used"]
pub fn ma<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
    ma_type: MaType,
) -> Result<IndicatorOutput<T>> {
    match ma_type {
        MaType::Sma => sma::sma(data, range, period),
        MaType::Ema => ema::ema(data, range, period),
        MaType::Wma => wma::wma(data, range, period),
        MaType::Dema => dema::dema(data, range, period),
        MaType::Tema => tema::tema(data, range, period),
        MaType::Trima => trima::trima(data, range, period),
        MaType::Kama => kama::kama(data, range, period),
    }
}
