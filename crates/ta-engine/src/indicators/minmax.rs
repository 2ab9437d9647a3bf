//! Rolling minimum and maximum of a single series.
//!
//! ```text
//! Min[i] = min(data[i-period+1..=i])
//! Max[i] = max(data[i-period+1..=i])
//! ```
//!
//! `values` is the minimum; the maximum is under [`SeriesKey::Maximum`].

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_extremum, Extremum};
use crate::output::{IndicatorOutput, SeriesKey};
use crate::traits::SeriesElement;
use crate::validation::{validate, IndexRange};

/// Returns the lookback period for min/max: `period - 1`.
#[inline]
#[must_use]
pub const fn min_max_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Returns the minimum input length for one min/max value: `period`.
#[inline]
#[must_use]
pub const fn min_max_min_len(period: usize) -> usize {
    period
}

/// Computes the rolling minimum and maximum over `range`.
///
/// # Errors
///
/// Returns an error if the input is empty, the range is out of bounds or
/// `period` is zero.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::min_max;
/// use ta_engine::output::SeriesKey;
/// use ta_engine::validation::IndexRange;
///
/// let data = [3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0];
/// let out = min_max(&data, IndexRange::full(6), 3).unwrap();
///
/// assert_eq!(out.values(), &[1.0, 1.0, 1.0, 1.0]);
/// assert_eq!(out.series(SeriesKey::Maximum).unwrap(), &[4.0, 4.0, 5.0, 9.0]);
/// ```
#[must_use = "this returns a Result with the min/max output, which should be used"]
pub fn min_max<T: SeriesElement>(
    data: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[data])?;
    let Some(window) = requested.after_lookback(min_max_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let min = rolling_extremum(data, period, window, Extremum::Min)?;
    let max = rolling_extremum(data, period, window, Extremum::Max)?;
    IndicatorOutput::new(window.begin, min).with_series(SeriesKey::Maximum, max)
}
