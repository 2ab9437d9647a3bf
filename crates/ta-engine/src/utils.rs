//! Numeric primitives shared by the indicator engines.
//!
//! Aggregates over finite slices (sum, mean, population variance, standard
//! deviation, extrema), fixed-precision rounding and tolerance-based
//! comparison.
//!
//! # Floating-Point Comparison
//!
//! Denominator guards inside the indicators use [`is_zero`], which compares
//! against [`EPSILON`] (1e-9) rather than testing for exact zero. Tests use
//! [`approx_eq`] with an explicit tolerance.
//!
//! # Example
//!
//! ```
//! use ta_engine::utils::{approx_eq, mean, std_dev};
//!
//! let data = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert!(approx_eq(mean(&data).unwrap(), 5.0, 1e-12));
//! assert!(approx_eq(std_dev(&data).unwrap(), 2.0, 1e-12));
//! ```

use crate::error::{InvalidParameter, Result};
use crate::traits::SeriesElement;

/// Tolerance used for zero tests and approximate equality.
pub const EPSILON: f64 = 1e-9;

/// Looser tolerance for comparisons after long accumulations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Returns `true` if `a` and `b` are within `tolerance` of each other.
///
/// Two NaNs compare equal, which keeps NaN-padded aligned outputs comparable
/// in tests.
///
/// # Example
///
/// ```
/// use ta_engine::utils::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, 1e-10));
/// assert!(approx_eq(f64::NAN, f64::NAN, 1e-10));
/// assert!(!approx_eq(f64::NAN, 1.0, 1e-10));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Returns `true` if `a` and `b` differ by less than [`EPSILON`].
#[inline]
#[must_use]
pub fn are_equal<T: SeriesElement>(a: T, b: T) -> bool {
    (a - b).abs() < epsilon()
}

/// Returns `true` if `value` is within [`EPSILON`] of zero.
#[inline]
#[must_use]
pub fn is_zero<T: SeriesElement>(value: T) -> bool {
    value.abs() < epsilon()
}

#[inline]
fn epsilon<T: SeriesElement>() -> T {
    <T as num_traits::NumCast>::from(EPSILON).unwrap_or_else(T::epsilon)
}

/// Sum of all values. The empty sum is zero.
#[inline]
#[must_use]
pub fn sum<T: SeriesElement>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Arithmetic mean.
///
/// # Errors
///
/// Returns `InvalidParameter::EmptyInput` for an empty slice.
pub fn mean<T: SeriesElement>(values: &[T]) -> Result<T> {
    if values.is_empty() {
        return Err(InvalidParameter::EmptyInput.into());
    }
    Ok(sum(values) / T::from_usize(values.len())?)
}

/// Population variance of `values` around a precomputed `mean`.
///
/// # Errors
///
/// Returns `InvalidParameter::EmptyInput` for an empty slice.
pub fn variance<T: SeriesElement>(values: &[T], mean: T) -> Result<T> {
    if values.is_empty() {
        return Err(InvalidParameter::EmptyInput.into());
    }
    let squares = values.iter().fold(T::zero(), |acc, &v| {
        let diff = v - mean;
        acc + diff * diff
    });
    Ok(squares / T::from_usize(values.len())?)
}

/// Population standard deviation.
///
/// # Errors
///
/// Returns `InvalidParameter::EmptyInput` for an empty slice.
pub fn std_dev<T: SeriesElement>(values: &[T]) -> Result<T> {
    let m = mean(values)?;
    Ok(variance(values, m)?.sqrt())
}

/// Largest value in the slice, or `None` if it is empty.
#[must_use]
pub fn max_in<T: SeriesElement>(values: &[T]) -> Option<T> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |m, &v| if v > m { v } else { m }))
}

/// Smallest value in the slice, or `None` if it is empty.
#[must_use]
pub fn min_in<T: SeriesElement>(values: &[T]) -> Option<T> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |m, &v| if v < m { v } else { m }))
}

/// Rounds to the nearest integer, halves away from zero.
///
/// Intended for non-negative inputs: `floor(x + 0.5)`.
#[inline]
#[must_use]
pub fn round_pos<T: SeriesElement>(value: T) -> T {
    (value + half()).floor()
}

/// Rounds to the nearest integer, halves away from zero.
///
/// Intended for non-positive inputs: `ceil(x - 0.5)`.
#[inline]
#[must_use]
pub fn round_neg<T: SeriesElement>(value: T) -> T {
    (value - half()).ceil()
}

/// Rounds to `decimals` fractional digits, halves away from zero.
///
/// # Errors
///
/// Returns `Error::InternalError` if the scale factor cannot be represented.
///
/// # Example
///
/// ```
/// use ta_engine::utils::round_to;
///
/// assert_eq!(round_to(1.235_f64, 2).unwrap(), 1.24);
/// assert_eq!(round_to(-1.235_f64, 2).unwrap(), -1.24);
/// ```
pub fn round_to<T: SeriesElement>(value: T, decimals: u32) -> Result<T> {
    let scale = T::from_f64(10f64.powi(decimals as i32))?;
    let scaled = value * scale;
    let rounded = if scaled < T::zero() {
        round_neg(scaled)
    } else {
        round_pos(scaled)
    };
    Ok(rounded / scale)
}

#[inline]
fn half<T: SeriesElement>() -> T {
    T::one() / (T::one() + T::one())
}
