//! On-Balance Volume (OBV) indicator.
//!
//! OBV is a momentum indicator that uses volume flow to anticipate changes in
//! price. It was developed by Joseph Granville.
//!
//! # Algorithm
//!
//! OBV is a running total seeded at the first requested bar:
//!
//! ```text
//! OBV[start] = volume[start]
//!
//! If close[i] > close[i-1]: OBV[i] = OBV[i-1] + volume[i]
//! If close[i] < close[i-1]: OBV[i] = OBV[i-1] - volume[i]
//! If close[i] == close[i-1]: OBV[i] = OBV[i-1]
//! ```
//!
//! Because the total is seeded at the requested start, OBV values depend on
//! where the range begins; only their differences are comparable across
//! ranges.
//!
//! # Interpretation
//!
//! - Rising OBV indicates buying pressure (accumulation)
//! - Falling OBV indicates selling pressure (distribution)
//! - OBV diverging from price can signal potential reversals
//!
//! # Example
//!
//! ```
//! use ta_engine::indicators::obv;
//! use ta_engine::validation::IndexRange;
//!
//! let close = [10.0_f64, 10.5, 10.2, 10.8, 10.5];
//! let volume = [1000.0, 1500.0, 1200.0, 1800.0, 1100.0];
//!
//! let out = obv(&close, &volume, IndexRange::full(5)).unwrap();
//! assert_eq!(out.begin_index(), 0);
//! assert_eq!(out.values(), &[1000.0, 2500.0, 1300.0, 3100.0, 2000.0]);
//! ```

use crate::error::Result;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::validation::{validate_series, IndexRange};

/// Returns the lookback period for OBV, which is 0.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::obv::obv_lookback;
///
/// assert_eq!(obv_lookback(), 0);
/// ```
#[inline]
#[must_use]
pub const fn obv_lookback() -> usize {
    0
}

/// Returns the minimum input length required for OBV: 1.
#[inline]
#[must_use]
pub const fn obv_min_len() -> usize {
    1
}

/// Computes On-Balance Volume over `range`.
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length or the
/// range is out of bounds.
#[must_use = "this returns a Result with the OBV output, which should be used"]
pub fn obv<T: SeriesElement>(
    close: &[T],
    volume: &[T],
    range: IndexRange,
) -> Result<IndicatorOutput<T>> {
    let window = validate_series(range, &[close, volume])?;

    let mut out = alloc_output(window.count)?;
    let mut total = volume[window.begin];
    out.push(total);

    for i in window.begin + 1..=window.end() {
        if close[i] > close[i - 1] {
            total = total + volume[i];
        } else if close[i] < close[i - 1] {
            total = total - volume[i];
        }
        out.push(total);
    }

    Ok(IndicatorOutput::new(window.begin, out))
}
