//! Composed indicators.
//!
//! The Stochastic RSI, the slow stochastic and the MACD signal each feed
//! one indicator's output into another. These tests check that the
//! warm-ups compound and that the composed values equal the stages run by
//! hand.

mod common;

use common::{approx_eq, assert_slices_close, sample_series, wave, EPSILON, LOOSE_EPSILON};
use ta_engine::engine::Indicator;
use ta_engine::prelude::*;

/// Runs `f` over `values` as a fresh series and shifts the result so that
/// index 0 of `values` maps to `offset`.
fn rebased(
    offset: usize,
    values: &[f64],
    f: impl Fn(&[f64], IndexRange) -> Result<IndicatorOutput<f64>>,
) -> (usize, Vec<f64>, Option<Vec<f64>>) {
    let out = f(values, IndexRange::full(values.len())).unwrap();
    let extra = out.series(SeriesKey::FastD).map(<[f64]>::to_vec);
    (offset + out.begin_index(), out.into_values(), extra)
}

// ==================== Stochastic RSI ====================

#[test]
fn stochrsi_lookback_compounds() {
    assert_eq!(stochrsi_lookback(14, 14, 3, MaType::Sma), 14 + 13 + 2);
    assert_eq!(stochrsi_lookback(14, 5, 3, MaType::Ema), 14 + 4 + 2);
    assert_eq!(stochrsi_lookback(2, 1, 1, MaType::Sma), 2);

    let data = wave(200, 50.0);
    let out = stochrsi(&data, IndexRange::full(200), 14, 14, 3, MaType::Sma).unwrap();
    assert_eq!(out.begin_index(), 29);
    assert_eq!(out.element_count(), 171);
}

#[test]
fn stochrsi_is_stochf_of_rsi() {
    let data = wave(150, 50.0);
    let range = IndexRange::full(150);

    let composed = stochrsi(&data, range, 9, 5, 3, MaType::Sma).unwrap();

    let inner = rsi(&data, range, 9).unwrap();
    let (begin, k, d) = rebased(inner.begin_index(), inner.values(), |v, r| {
        stochf(v, v, v, r, 5, 3, MaType::Sma)
    });

    assert_eq!(composed.begin_index(), begin);
    assert_slices_close(composed.values(), &k, EPSILON);
    assert_slices_close(
        composed.series(SeriesKey::FastD).unwrap(),
        &d.unwrap(),
        EPSILON,
    );
}

#[test]
fn stochrsi_bounded() {
    let data = wave(300, 80.0);
    let out = stochrsi(&data, IndexRange::full(300), 14, 14, 3, MaType::Ema).unwrap();
    let fast_d = out.series(SeriesKey::FastD).unwrap();
    for &v in out.values().iter().chain(fast_d) {
        assert!((-LOOSE_EPSILON..=100.0 + LOOSE_EPSILON).contains(&v));
    }
}

#[test]
fn stochrsi_late_start_keeps_requested_begin() {
    let data = wave(200, 50.0);
    let out = stochrsi(&data, IndexRange::new(120, 180), 14, 14, 3, MaType::Sma).unwrap();
    assert_eq!(out.begin_index(), 120);
    assert_eq!(out.element_count(), 61);
}

#[test]
fn stochrsi_too_short_is_empty() {
    let data = wave(29, 50.0);
    let out = stochrsi(&data, IndexRange::full(29), 14, 14, 3, MaType::Sma).unwrap();
    assert!(out.is_empty());
}

// ==================== Slow Stochastic ====================

#[test]
fn slow_stochastic_smooths_fast_k() {
    let s = sample_series(120);
    let range = IndexRange::full(120);

    let slow = stoch(s.high(), s.low(), s.close(), range, 14, 3, MaType::Sma, 3, MaType::Sma)
        .unwrap();
    assert_eq!(slow.begin_index(), 13 + 2 + 2);
    assert_eq!(
        slow.begin_index(),
        stoch_lookback(14, 3, MaType::Sma, 3, MaType::Sma)
    );

    // raw %K is the fast line with a one-period %D
    let raw = stochf(s.high(), s.low(), s.close(), range, 14, 1, MaType::Sma).unwrap();
    let (k_begin, slow_k, _) = rebased(raw.begin_index(), raw.values(), |v, r| sma(v, r, 3));
    let (d_begin, slow_d, _) = rebased(k_begin, &slow_k, |v, r| sma(v, r, 3));

    assert_eq!(d_begin, slow.begin_index());
    assert_slices_close(slow.values(), &slow_k[d_begin - k_begin..], LOOSE_EPSILON);
    assert_slices_close(slow.series(SeriesKey::SlowD).unwrap(), &slow_d, LOOSE_EPSILON);
}

#[test]
fn slow_stochastic_lines_aligned() {
    let s = sample_series(90);
    let out = stoch(
        s.high(),
        s.low(),
        s.close(),
        IndexRange::new(30, 89),
        5,
        3,
        MaType::Ema,
        4,
        MaType::Wma,
    )
    .unwrap();
    assert_eq!(out.begin_index(), 30);
    assert_eq!(out.element_count(), 60);
    assert_eq!(out.series(SeriesKey::SlowD).unwrap().len(), 60);
}

// ==================== MACD ====================

#[test]
fn macd_lookback_compounds() {
    assert_eq!(macd_lookback(12, 26, 9), 25 + 8);
    assert_eq!(macd_lookback(5, 10, 1), 9);
    // fast and slow are swapped when given out of order
    assert_eq!(macd_lookback(26, 12, 9), 33);

    let data = wave(100, 30.0);
    let a = macd(&data, IndexRange::full(100), 12, 26, 9).unwrap();
    let b = macd(&data, IndexRange::full(100), 26, 12, 9).unwrap();
    assert_eq!(a, b);
}

#[test]
fn macd_late_start() {
    let data = wave(100, 30.0);
    let out = macd(&data, IndexRange::new(50, 99), 12, 26, 9).unwrap();
    assert_eq!(out.begin_index(), 50);
    assert_eq!(out.element_count(), 50);
    for key in [SeriesKey::Signal, SeriesKey::Histogram] {
        assert_eq!(out.series(key).unwrap().len(), 50);
    }
}

// ==================== Bollinger over other averages ====================

#[test]
fn bollinger_middle_is_selected_average() {
    let data = wave(80, 10.0);
    let range = IndexRange::full(80);
    for ma_type in MaType::ALL {
        let bands = bollinger(&data, range, 6, 2.0, 2.0, ma_type).unwrap();
        let middle = ma(&data, range, 6, ma_type).unwrap();
        assert_eq!(bands.begin_index(), bollinger_lookback(6, ma_type));
        assert_eq!(bands.begin_index(), middle.begin_index());
        for (a, b) in bands.values().iter().zip(middle.values()) {
            assert!(approx_eq(*a, *b, EPSILON));
        }
    }
}

// ==================== Engine ====================

#[test]
fn engine_composites_match_direct_calls() {
    let s = sample_series(150);
    let range = IndexRange::full(150);

    let srsi = Indicator::StochRsi {
        period: 14,
        fast_k_period: 5,
        fast_d_period: 3,
        fast_d_ma: MaType::Sma,
        source: PriceField::Close,
    };
    assert_eq!(
        srsi.compute(&s, range).unwrap(),
        stochrsi(s.close(), range, 14, 5, 3, MaType::Sma).unwrap()
    );
    assert_eq!(srsi.lookback(), stochrsi_lookback(14, 5, 3, MaType::Sma));

    let slow = Indicator::Stoch {
        fast_k_period: 14,
        slow_k_period: 3,
        slow_k_ma: MaType::Sma,
        slow_d_period: 3,
        slow_d_ma: MaType::Sma,
    };
    assert_eq!(
        slow.compute(&s, range).unwrap(),
        stoch(s.high(), s.low(), s.close(), range, 14, 3, MaType::Sma, 3, MaType::Sma).unwrap()
    );
}
