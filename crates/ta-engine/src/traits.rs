//! Core traits for ta-engine numeric operations.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` so every indicator is
//! written once. [`ValidatedInput`] adds the per-series checks used by the
//! [`validation`](crate::validation) layer.
//!
//! # Example
//!
//! ```
//! use ta_engine::traits::SeriesElement;
//!
//! fn mean<T: SeriesElement>(data: &[T]) -> ta_engine::Result<T> {
//!     let n = T::from_usize(data.len())?;
//!     Ok(data.iter().fold(T::zero(), |acc, &x| acc + x) / n)
//! }
//!
//! assert!((mean(&[1.0_f64, 2.0, 3.0]).unwrap() - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, InvalidParameter, Result};

/// A trait for types that can be used as elements in a data series.
///
/// The bound set is what the recurrences need: IEEE float arithmetic, numeric
/// casts for turning periods into factors, and `Send + Sync` so calls can run
/// on any thread.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InternalError` if the value cannot be represented.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::InternalError {
            context: "usize to series element conversion",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InternalError` if the value cannot be represented.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::InternalError {
            context: "f64 to series element conversion",
        })
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Per-series validation helpers.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(InvalidParameter::EmptyInput.into())
        } else {
            Ok(())
        }
    }

    /// Validates that the series has exactly `expected` elements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter::LengthMismatch` otherwise.
    #[inline]
    fn validate_len(&self, expected: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(InvalidParameter::LengthMismatch {
                expected,
                actual: self.len(),
            }
            .into())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}
