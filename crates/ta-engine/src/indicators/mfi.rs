//! MFI (Money Flow Index) indicator.
//!
//! The Money Flow Index is a volume-weighted RSI: it weighs buying against
//! selling pressure using both price and volume.
//!
//! # Formula
//!
//! ```text
//! Typical Price    = (High + Low + Close) / 3
//! Raw Money Flow   = Typical Price × Volume
//! Money Flow Ratio = Positive Money Flow / Negative Money Flow
//! MFI              = 100 - 100 / (1 + Money Flow Ratio)
//! ```
//!
//! Where, over the last `period` bars:
//! - Positive Money Flow = sum of Raw MF where TP > previous TP
//! - Negative Money Flow = sum of Raw MF where TP < previous TP
//!
//! Bars with an unchanged typical price count toward neither sum. MFI is 100
//! when the negative flow sum is zero, which includes windows of zero volume.
//!
//! # Lookback
//!
//! The lookback period is `period`: the first bar of each window needs the
//! typical price before it.

use crate::error::Result;
use crate::output::{alloc_output, IndicatorOutput};
use crate::traits::SeriesElement;
use crate::utils::is_zero;
use crate::validation::{validate, IndexRange};

/// Computes the lookback period for MFI.
#[inline]
#[must_use]
pub const fn mfi_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length required for one MFI value.
#[inline]
#[must_use]
pub const fn mfi_min_len(period: usize) -> usize {
    period + 1
}

/// Signed money flow of one bar.
#[derive(Debug, Clone, Copy)]
enum Flow<T> {
    Positive(T),
    Negative(T),
    Neutral,
}

/// Running positive/negative flow over a window.
///
/// A side's sum is reset to exactly zero once it holds no bars, so the
/// running subtraction cannot leave a residue behind.
struct FlowWindow<T> {
    positive: T,
    negative: T,
    positive_bars: usize,
    negative_bars: usize,
}

impl<T: SeriesElement> FlowWindow<T> {
    fn new() -> Self {
        Self {
            positive: T::zero(),
            negative: T::zero(),
            positive_bars: 0,
            negative_bars: 0,
        }
    }

    fn add(&mut self, flow: Flow<T>) {
        match flow {
            Flow::Positive(v) => {
                self.positive = self.positive + v;
                self.positive_bars += 1;
            }
            Flow::Negative(v) => {
                self.negative = self.negative + v;
                self.negative_bars += 1;
            }
            Flow::Neutral => {}
        }
    }

    fn remove(&mut self, flow: Flow<T>) {
        match flow {
            Flow::Positive(v) => {
                self.positive_bars -= 1;
                self.positive = if self.positive_bars == 0 {
                    T::zero()
                } else {
                    self.positive - v
                };
            }
            Flow::Negative(v) => {
                self.negative_bars -= 1;
                self.negative = if self.negative_bars == 0 {
                    T::zero()
                } else {
                    self.negative - v
                };
            }
            Flow::Neutral => {}
        }
    }

    fn index(&self, hundred: T) -> T {
        if is_zero(self.negative) {
            hundred
        } else {
            hundred - hundred / (T::one() + self.positive / self.negative)
        }
    }
}

/// Computes the Money Flow Index over `range`.
///
/// # Errors
///
/// Returns an error if an input is empty, the inputs differ in length, the
/// range is out of bounds or `period` is zero.
///
/// # Example
///
/// ```
/// use ta_engine::indicators::mfi;
/// use ta_engine::validation::IndexRange;
///
/// let high = [10.0_f64, 11.0, 12.0, 13.0, 14.0];
/// let low = [9.0_f64, 10.0, 11.0, 12.0, 13.0];
/// let close = [9.5_f64, 10.5, 11.5, 12.5, 13.5];
/// let volume = [100.0_f64; 5];
///
/// // every bar rises: no negative flow
/// let out = mfi(&high, &low, &close, &volume, IndexRange::full(5), 3).unwrap();
/// assert_eq!(out.begin_index(), 3);
/// assert_eq!(out.values(), &[100.0, 100.0]);
/// ```
#[must_use = "this returns a Result with the MFI output, which should be used"]
pub fn mfi<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    range: IndexRange,
    period: usize,
) -> Result<IndicatorOutput<T>> {
    let requested = validate(range, period, &[high, low, close, volume])?;
    let Some(window) = requested.after_lookback(mfi_lookback(period)) else {
        return Ok(IndicatorOutput::empty(range.start));
    };

    let three = T::from_usize(3)?;
    let hundred = T::from_usize(100)?;
    let typical = |i: usize| (high[i] + low[i] + close[i]) / three;

    // flows[k] belongs to bar first + k
    let first = window.begin + 1 - period;
    let mut flows = alloc_output(window.end() + 1 - first)?;
    let mut prev_tp = typical(first - 1);
    for i in first..=window.end() {
        let tp = typical(i);
        let raw = tp * volume[i];
        // a bar without volume moves no money
        flows.push(if is_zero(raw) {
            Flow::Neutral
        } else if tp > prev_tp {
            Flow::Positive(raw)
        } else if tp < prev_tp {
            Flow::Negative(raw)
        } else {
            Flow::Neutral
        });
        prev_tp = tp;
    }

    let mut state = FlowWindow::new();
    for &flow in &flows[..period] {
        state.add(flow);
    }

    let mut out = alloc_output(window.count)?;
    out.push(state.index(hundred));
    for k in period..flows.len() {
        state.remove(flows[k - period]);
        state.add(flows[k]);
        out.push(state.index(hundred));
    }

    Ok(IndicatorOutput::new(window.begin, out))
}
