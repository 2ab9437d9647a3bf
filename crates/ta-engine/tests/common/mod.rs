//! Shared helpers for the integration tests.

#![allow(dead_code)]

use ta_engine::ohlcv::{Candle, OhlcvSeries};

/// Tight tolerance for values computed the same way twice.
pub const EPSILON: f64 = 1e-10;

/// Tolerance for values computed along different arithmetic paths.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Compares two floats within `eps`, treating NaN as equal to NaN.
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Asserts element-wise equality within `eps`.
pub fn assert_slices_close(actual: &[f64], expected: &[f64], eps: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(approx_eq(*a, *e, eps), "index {i}: {a} != {e}");
    }
}

/// A deterministic price path oscillating around `base`.
pub fn wave(n: usize, base: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            base + (t * 0.3).sin() * 4.0 + (t * 0.07).cos() * 2.5 + t * 0.02
        })
        .collect()
}

/// Builds consistent candles around `close`: high and low bracket the
/// open and close, volume varies with the bar.
pub fn candles_from_closes(close: &[f64]) -> Vec<Candle> {
    close
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let open = if i == 0 { c } else { close[i - 1] };
            let spread = 0.5 + (i as f64 * 0.9).sin().abs();
            Candle {
                time: 1_700_000_000 + i as i64 * 60,
                open,
                high: open.max(c) + spread,
                low: open.min(c) - spread,
                close: c,
                volume: 1_000.0 + (i % 7) as f64 * 150.0,
            }
        })
        .collect()
}

/// A deterministic OHLCV series of `n` bars.
pub fn sample_series(n: usize) -> OhlcvSeries<f64> {
    OhlcvSeries::from_candles(&candles_from_closes(&wave(n, 100.0)))
        .expect("sample candles are non-empty")
}
