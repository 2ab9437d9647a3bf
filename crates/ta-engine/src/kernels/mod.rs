//! Shared computation kernels.
//!
//! - [`rolling_extrema`]: Monotonic deque for O(n) rolling max/min
//! - [`wilder`]: Wilder's smoothing recurrences used by RSI, ATR and ADX

pub mod rolling_extrema;
pub mod wilder;

pub use rolling_extrema::{rolling_extremum, rolling_high_low, Extremum, MonotonicDeque};
pub use wilder::Wilder;
