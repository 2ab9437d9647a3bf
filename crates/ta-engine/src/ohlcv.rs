//! Candle records and their parallel-array form.
//!
//! Indicators consume one slice per field. [`OhlcvSeries`] holds those slices
//! for a run of candles, built either from [`Candle`] records or from
//! existing columns.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidParameter, Result};
use crate::traits::{SeriesElement, ValidatedInput};

/// One OHLCV candle for a time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket open time, as supplied by the data source.
    pub time: i64,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

/// A field of a candle, used to choose the input of single-series indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    /// Open price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// Close price.
    #[default]
    Close,
    /// Volume.
    Volume,
}

/// Parallel per-field columns of a candle run.
///
/// Every column has the same length and index `i` of each refers to the same
/// candle.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvSeries<T> {
    time: Vec<i64>,
    open: Vec<T>,
    high: Vec<T>,
    low: Vec<T>,
    close: Vec<T>,
    volume: Vec<T>,
}

impl<T: SeriesElement> OhlcvSeries<T> {
    /// Builds the columns from candle records.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter::EmptyInput` if `candles` is empty
    /// - `Error::InternalError` if a value cannot be represented as `T`
    ///
    /// # Example
    ///
    /// ```
    /// use ta_engine::ohlcv::{Candle, OhlcvSeries, PriceField};
    ///
    /// let candles = [
    ///     Candle { time: 0, open: 1.0, high: 2.0, low: 0.5, close: 1.5, volume: 10.0 },
    ///     Candle { time: 60, open: 1.5, high: 2.5, low: 1.0, close: 2.0, volume: 12.0 },
    /// ];
    /// let series = OhlcvSeries::<f64>::from_candles(&candles).unwrap();
    ///
    /// assert_eq!(series.len(), 2);
    /// assert_eq!(series.field(PriceField::Close), &[1.5, 2.0]);
    /// ```
    pub fn from_candles(candles: &[Candle]) -> Result<Self> {
        if candles.is_empty() {
            return Err(InvalidParameter::EmptyInput.into());
        }
        let mut series = Self {
            time: Vec::with_capacity(candles.len()),
            open: Vec::with_capacity(candles.len()),
            high: Vec::with_capacity(candles.len()),
            low: Vec::with_capacity(candles.len()),
            close: Vec::with_capacity(candles.len()),
            volume: Vec::with_capacity(candles.len()),
        };
        for candle in candles {
            series.time.push(candle.time);
            series.open.push(T::from_f64(candle.open)?);
            series.high.push(T::from_f64(candle.high)?);
            series.low.push(T::from_f64(candle.low)?);
            series.close.push(T::from_f64(candle.close)?);
            series.volume.push(T::from_f64(candle.volume)?);
        }
        Ok(series)
    }

    /// Builds the series from existing columns.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter::EmptyInput` if any column is empty
    /// - `InvalidParameter::LengthMismatch` if the columns differ in length
    pub fn from_columns(
        time: Vec<i64>,
        open: Vec<T>,
        high: Vec<T>,
        low: Vec<T>,
        close: Vec<T>,
        volume: Vec<T>,
    ) -> Result<Self> {
        for column in [&open, &high, &low, &close, &volume] {
            column.validate_not_empty()?;
        }
        let len = close.len();
        for column in [&open, &high, &low, &volume] {
            column.validate_len(len)?;
        }
        if time.len() != len {
            return Err(InvalidParameter::LengthMismatch {
                expected: len,
                actual: time.len(),
            }
            .into());
        }
        Ok(Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Number of candles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Whether the series holds no candles. Never true for a constructed
    /// series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Candle times.
    #[must_use]
    pub fn time(&self) -> &[i64] {
        &self.time
    }

    /// The column for `field`.
    #[must_use]
    pub fn field(&self, field: PriceField) -> &[T] {
        match field {
            PriceField::Open => &self.open,
            PriceField::High => &self.high,
            PriceField::Low => &self.low,
            PriceField::Close => &self.close,
            PriceField::Volume => &self.volume,
        }
    }

    /// Open prices.
    #[must_use]
    pub fn open(&self) -> &[T] {
        &self.open
    }

    /// High prices.
    #[must_use]
    pub fn high(&self) -> &[T] {
        &self.high
    }

    /// Low prices.
    #[must_use]
    pub fn low(&self) -> &[T] {
        &self.low
    }

    /// Close prices.
    #[must_use]
    pub fn close(&self) -> &[T] {
        &self.close
    }

    /// Volumes.
    #[must_use]
    pub fn volume(&self) -> &[T] {
        &self.volume
    }
}
