//! Index-range validation shared by every indicator.
//!
//! All indicators in this crate follow one indexing contract:
//!
//! - The caller requests an inclusive range `[start, end]` of the input.
//! - An indicator with lookback `L` produces its first value at
//!   `begin = max(start, L)`. Warm-up data before `start` is read when the
//!   input has it, so asking for `start >= L` costs no output.
//! - If the warm-up swallows the whole range (`begin > end`) the call still
//!   succeeds, with an empty output.
//!
//! [`validate`] performs the checks in a fixed order and returns the
//! requestable [`OutputWindow`]; [`OutputWindow::after_lookback`] then trims
//! it to the produced window.
//!
//! # Example
//!
//! ```
//! use ta_engine::validation::{validate, IndexRange};
//!
//! let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let requested = validate(IndexRange::full(data.len()), 3, &[&data[..]]).unwrap();
//! assert_eq!((requested.begin, requested.count), (0, 5));
//!
//! let produced = requested.after_lookback(2).unwrap();
//! assert_eq!((produced.begin, produced.count), (2, 3));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidParameter, Result};
use crate::traits::{SeriesElement, ValidatedInput};

/// An inclusive `[start, end]` range of input indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    /// First requested index.
    pub start: usize,
    /// Last requested index (inclusive).
    pub end: usize,
}

impl IndexRange {
    /// Creates a range covering `start..=end`.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The range covering a whole series of `len` elements.
    ///
    /// For `len == 0` this is `[0, 0]`, which validation rejects as empty input.
    #[inline]
    #[must_use]
    pub const fn full(len: usize) -> Self {
        Self {
            start: 0,
            end: len.saturating_sub(1),
        }
    }

    /// Number of indices in the range, 0 if `end < start`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Returns true if the range contains no indices.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The same range moved back by `warmup` indices, clamped at 0.
    ///
    /// Used by composite indicators to run an inner indicator early enough
    /// that the outer one has its warm-up data by `start`.
    #[inline]
    #[must_use]
    pub const fn extend_back(self, warmup: usize) -> Self {
        Self {
            start: self.start.saturating_sub(warmup),
            end: self.end,
        }
    }
}

/// A window `begin..begin + count` of absolute input indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputWindow {
    /// First index.
    pub begin: usize,
    /// Number of indices.
    pub count: usize,
}

impl OutputWindow {
    /// Last index of the window. Meaningless for an empty window.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.begin + self.count.saturating_sub(1)
    }

    /// Shrinks the window to the indices that have `lookback` prior points.
    ///
    /// Returns `None` when no index qualifies.
    #[inline]
    #[must_use]
    pub const fn after_lookback(self, lookback: usize) -> Option<Self> {
        if self.count == 0 {
            return None;
        }
        let end = self.end();
        let begin = if self.begin > lookback {
            self.begin
        } else {
            lookback
        };
        if begin > end {
            None
        } else {
            Some(Self {
                begin,
                count: end - begin + 1,
            })
        }
    }
}

/// Validates the inputs and range of an indicator without a period.
///
/// Checks, in order: every input non-empty, all inputs the same length,
/// `start < len`, `start <= end < len`.
///
/// # Errors
///
/// - `InvalidParameter::EmptyInput` if there are no inputs or any is empty
/// - `InvalidParameter::LengthMismatch` if companion inputs differ in length
/// - `Error::OutOfRangeStartIndex` / `Error::OutOfRangeEndIndex` for bad ranges
pub fn validate_series<T: SeriesElement>(
    range: IndexRange,
    inputs: &[&[T]],
) -> Result<OutputWindow> {
    let Some((first, rest)) = inputs.split_first() else {
        return Err(InvalidParameter::EmptyInput.into());
    };
    for input in inputs {
        input.validate_not_empty().map_err(reject)?;
    }
    let len = first.len();
    for input in rest {
        input.validate_len(len).map_err(reject)?;
    }

    if range.start >= len {
        return Err(reject(Error::OutOfRangeStartIndex {
            start: range.start,
            len,
        }));
    }
    if range.end < range.start || range.end >= len {
        return Err(reject(Error::OutOfRangeEndIndex {
            start: range.start,
            end: range.end,
            len,
        }));
    }

    Ok(OutputWindow {
        begin: range.start,
        count: range.len(),
    })
}

/// Validates inputs, range and a single `period` (which must be at least 1).
///
/// # Errors
///
/// Everything [`validate_series`] reports, then
/// `InvalidParameter::InvalidPeriod` for a zero period.
pub fn validate<T: SeriesElement>(
    range: IndexRange,
    period: usize,
    inputs: &[&[T]],
) -> Result<OutputWindow> {
    let window = validate_series(range, inputs)?;
    validate_period("period", period, 1)?;
    Ok(window)
}

/// Checks that a named period is at least `min`.
///
/// # Errors
///
/// Returns `InvalidParameter::InvalidPeriod` otherwise.
#[inline]
pub fn validate_period(name: &'static str, period: usize, min: usize) -> Result<()> {
    if period < min {
        return Err(reject(Error::invalid_period(name, period, min)));
    }
    Ok(())
}

/// Checks that a band multiplier is finite.
///
/// # Errors
///
/// Returns `InvalidParameter::InvalidMultiplier` for NaN or infinities.
#[inline]
pub fn validate_multiplier<T: SeriesElement>(name: &'static str, value: T) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(reject(InvalidParameter::InvalidMultiplier { name }.into()))
    }
}

fn reject(err: Error) -> Error {
    tracing::trace!(error = %err, "input rejected");
    err
}
