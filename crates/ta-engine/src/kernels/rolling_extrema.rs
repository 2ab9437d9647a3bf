//! Rolling extrema using a monotonic deque.
//!
//! Highest-high and lowest-low windows appear in the stochastics, Williams %R,
//! the price channel and `min_max`. A naive scan costs O(k) per output; the
//! monotonic deque brings that down to amortized O(1).
//!
//! # Algorithm
//!
//! The deque holds input indices whose values are monotonically ordered:
//!
//! - For rolling max: values at those indices are decreasing
//! - For rolling min: values at those indices are increasing
//!
//! The front is always the extremum of the current window. A new index pops
//! every back entry it dominates, then the front is dropped once it falls
//! out of the window.
//!
//! # Complexity
//!
//! - Time: O(n) for n elements
//! - Space: O(k) for the deque, where k is the period
//!
//! # Example
//!
//! ```
//! use ta_engine::kernels::rolling_extrema::{rolling_extremum, Extremum};
//! use ta_engine::validation::OutputWindow;
//!
//! let data = [3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//! let window = OutputWindow { begin: 2, count: 6 };
//!
//! let max = rolling_extremum(&data, 3, window, Extremum::Max).unwrap();
//! assert_eq!(max, vec![4.0, 4.0, 5.0, 9.0, 9.0, 9.0]);
//! ```

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::output::alloc_output;
use crate::traits::SeriesElement;
use crate::validation::OutputWindow;

/// Which end of the window to track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Highest value in the window.
    Max,
    /// Lowest value in the window.
    Min,
}

impl Extremum {
    #[inline]
    fn dominates<T: SeriesElement>(self, new: T, old: T) -> bool {
        match self {
            Self::Max => new >= old,
            Self::Min => new <= old,
        }
    }
}

/// A monotonic deque of input indices for one rolling extremum.
#[derive(Debug, Clone)]
pub struct MonotonicDeque {
    deque: VecDeque<usize>,
    period: usize,
    kind: Extremum,
}

impl MonotonicDeque {
    /// Creates an empty deque for windows of `period` elements.
    #[must_use]
    pub fn new(period: usize, kind: Extremum) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
            kind,
        }
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns true if no index is tracked.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Number of indices currently tracked.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Adds `data[index]` to the window ending at `index`.
    ///
    /// Indices must be pushed in increasing order. NaN values are skipped and
    /// never become the extremum.
    #[inline]
    pub fn push<T: SeriesElement>(&mut self, index: usize, data: &[T]) {
        let Some(&value) = data.get(index) else {
            return;
        };
        if value.is_nan() {
            self.remove_expired(index);
            return;
        }

        while let Some(&back) = self.deque.back() {
            let back_val = data[back];
            if back_val.is_nan() || self.kind.dominates(value, back_val) {
                self.deque.pop_back();
            } else {
                break;
            }
        }
        self.deque.push_back(index);
        self.remove_expired(index);
    }

    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        let window_start = (current_index + 1).saturating_sub(self.period);
        while let Some(&front) = self.deque.front() {
            if front < window_start {
                self.deque.pop_front();
            } else {
                break;
            }
        }
    }

    /// Index of the current extremum.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Value of the current extremum, NaN if the window holds no number.
    #[inline]
    pub fn extremum<T: SeriesElement>(&self, data: &[T]) -> T {
        self.front_index()
            .and_then(|idx| data.get(idx).copied())
            .unwrap_or_else(T::nan)
    }
}

/// Rolling extremum of `data` over `period`-wide windows ending at each index
/// of `window`.
///
/// The window must start at or after `period - 1` so every output has a full
/// window of input behind it.
///
/// # Errors
///
/// - `Error::InternalError` if `window` starts too early or runs past `data`
/// - `Error::AllocError` if the output buffer cannot be reserved
pub fn rolling_extremum<T: SeriesElement>(
    data: &[T],
    period: usize,
    window: OutputWindow,
    kind: Extremum,
) -> Result<Vec<T>> {
    let first = first_window_index(data.len(), period, window)?;
    let mut out = alloc_output(window.count)?;
    let mut deque = MonotonicDeque::new(period, kind);

    for i in first..=window.end() {
        deque.push(i, data);
        if i >= window.begin {
            out.push(deque.extremum(data));
        }
    }
    Ok(out)
}

/// Highest `high` and lowest `low` over the same windows.
///
/// Returns `(highest, lowest)`, each `window.count` long.
///
/// # Errors
///
/// Same as [`rolling_extremum`]; `high` and `low` must have equal length.
pub fn rolling_high_low<T: SeriesElement>(
    high: &[T],
    low: &[T],
    period: usize,
    window: OutputWindow,
) -> Result<(Vec<T>, Vec<T>)> {
    if high.len() != low.len() {
        return Err(Error::InternalError {
            context: "high and low series differ in length",
        });
    }
    let first = first_window_index(high.len(), period, window)?;
    let mut highest = alloc_output(window.count)?;
    let mut lowest = alloc_output(window.count)?;
    let mut max_deque = MonotonicDeque::new(period, Extremum::Max);
    let mut min_deque = MonotonicDeque::new(period, Extremum::Min);

    for i in first..=window.end() {
        max_deque.push(i, high);
        min_deque.push(i, low);
        if i >= window.begin {
            highest.push(max_deque.extremum(high));
            lowest.push(min_deque.extremum(low));
        }
    }
    Ok((highest, lowest))
}

fn first_window_index(len: usize, period: usize, window: OutputWindow) -> Result<usize> {
    if period == 0 || window.count == 0 {
        return Err(Error::InternalError {
            context: "rolling extremum over an empty window",
        });
    }
    let lookback = period - 1;
    if window.begin < lookback || window.end() >= len {
        return Err(Error::InternalError {
            context: "rolling extremum window exceeds input",
        });
    }
    Ok(window.begin - lookback)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;

    fn naive(data: &[f64], period: usize, window: OutputWindow, kind: Extremum) -> Vec<f64> {
        (window.begin..=window.end())
            .map(|i| {
                let slice = &data[i + 1 - period..=i];
                match kind {
                    Extremum::Max => slice.iter().cloned().fold(f64::MIN, f64::max),
                    Extremum::Min => slice.iter().cloned().fold(f64::MAX, f64::min),
                }
            })
            .collect()
    }

    // ==================== MonotonicDeque Tests ====================

    #[test]
    fn test_deque_new() {
        let deque = MonotonicDeque::new(5, Extremum::Max);
        assert_eq!(deque.period(), 5);
        assert!(deque.is_empty());
        assert_eq!(deque.front_index(), None);
        assert!(deque.extremum::<f64>(&[]).is_nan());
    }

    #[test]
    fn test_deque_tracks_max() {
        let data = [1.0_f64, 3.0, 2.0, 5.0, 4.0];
        let mut deque = MonotonicDeque::new(3, Extremum::Max);

        deque.push(0, &data);
        assert_eq!(deque.extremum(&data), 1.0);
        deque.push(1, &data);
        assert_eq!(deque.extremum(&data), 3.0);
        deque.push(2, &data);
        assert_eq!(deque.extremum(&data), 3.0);
        assert_eq!(deque.len(), 2);
        deque.push(3, &data);
        assert_eq!(deque.extremum(&data), 5.0);
        assert_eq!(deque.len(), 1);
    }

    #[test]
    fn test_deque_expires_front() {
        let data = [9.0_f64, 1.0, 2.0, 3.0];
        let mut deque = MonotonicDeque::new(2, Extremum::Max);
        for i in 0..data.len() {
            deque.push(i, &data);
        }
        assert_eq!(deque.front_index(), Some(3));
    }

    #[test]
    fn test_deque_tracks_min() {
        let data = [5.0_f64, 3.0, 4.0, 1.0, 2.0];
        let mut deque = MonotonicDeque::new(3, Extremum::Min);
        let mut seen = Vec::new();
        for i in 0..data.len() {
            deque.push(i, &data);
            seen.push(deque.extremum(&data));
        }
        assert_eq!(seen, vec![5.0, 3.0, 3.0, 1.0, 1.0]);
    }

    #[test]
    fn test_deque_skips_nan() {
        let data = [2.0_f64, f64::NAN, 1.0];
        let mut deque = MonotonicDeque::new(3, Extremum::Max);
        deque.push(0, &data);
        deque.push(1, &data);
        assert_eq!(deque.extremum(&data), 2.0);
        deque.push(2, &data);
        assert_eq!(deque.extremum(&data), 2.0);
    }

    // ==================== rolling_extremum Tests ====================

    #[test]
    fn test_rolling_max_matches_naive() {
        let data: Vec<f64> = (0..50).map(|i| ((i * 37) % 17) as f64 - 8.0).collect();
        for period in 1..8 {
            let window = OutputWindow {
                begin: period - 1,
                count: data.len() - period + 1,
            };
            let fast = rolling_extremum(&data, period, window, Extremum::Max).unwrap();
            assert_eq!(fast, naive(&data, period, window, Extremum::Max));
            let fast = rolling_extremum(&data, period, window, Extremum::Min).unwrap();
            assert_eq!(fast, naive(&data, period, window, Extremum::Min));
        }
    }

    #[test]
    fn test_rolling_extremum_late_window() {
        let data = [3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let window = OutputWindow { begin: 5, count: 2 };
        let min = rolling_extremum(&data, 3, window, Extremum::Min).unwrap();
        assert_eq!(min, vec![1.0, 2.0]);
    }

    #[test]
    fn test_period_one_is_identity() {
        let data = [3.0_f64, 1.0, 4.0];
        let window = OutputWindow { begin: 0, count: 3 };
        assert_eq!(
            rolling_extremum(&data, 1, window, Extremum::Max).unwrap(),
            data.to_vec()
        );
    }

    #[test]
    fn test_window_too_early() {
        let data = [1.0_f64; 5];
        let window = OutputWindow { begin: 1, count: 2 };
        assert!(matches!(
            rolling_extremum(&data, 3, window, Extremum::Max),
            Err(Error::InternalError { .. })
        ));
    }

    // ==================== rolling_high_low Tests ====================

    #[test]
    fn test_rolling_high_low() {
        let high = [10.0_f64, 12.0, 11.0, 13.0, 12.5];
        let low = [9.0_f64, 10.0, 8.5, 11.0, 11.5];
        let window = OutputWindow { begin: 2, count: 3 };
        let (hh, ll) = rolling_high_low(&high, &low, 3, window).unwrap();
        assert_eq!(hh, vec![12.0, 13.0, 13.0]);
        assert_eq!(ll, vec![8.5, 8.5, 8.5]);
    }

    #[test]
    fn test_rolling_high_low_length_mismatch() {
        let window = OutputWindow { begin: 0, count: 1 };
        assert!(rolling_high_low(&[1.0_f64, 2.0], &[1.0], 1, window).is_err());
    }
}
