//! JSON-driven fixture tests.
//!
//! Each file in `tests/fixtures/` holds a list of cases. A case names an
//! indicator exactly as a configuration document would, gives the input
//! columns and an optional `[start, end]` range, and expects either an
//! output (`begin`, `values`, extra `series`) or an error code.

#![allow(clippy::float_cmp)]

mod common;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use common::{approx_eq, LOOSE_EPSILON};
use ta_engine::engine::Indicator;
use ta_engine::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    cases: Vec<FixtureCase>,
}

#[derive(Debug, Deserialize)]
struct FixtureCase {
    name: String,
    indicator: Indicator,
    input: FixtureInput,
    #[serde(default)]
    range: Option<[usize; 2]>,
    #[serde(default)]
    expected: Option<Expected>,
    #[serde(default)]
    error: Option<String>,
}

/// Input columns; any omitted price column falls back to `close`.
#[derive(Debug, Deserialize)]
struct FixtureInput {
    close: Vec<f64>,
    #[serde(default)]
    open: Option<Vec<f64>>,
    #[serde(default)]
    high: Option<Vec<f64>>,
    #[serde(default)]
    low: Option<Vec<f64>>,
    #[serde(default)]
    volume: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct Expected {
    begin: usize,
    values: Vec<f64>,
    #[serde(default)]
    series: BTreeMap<SeriesKey, Vec<f64>>,
}

impl FixtureInput {
    fn into_series(self) -> OhlcvSeries<f64> {
        let n = self.close.len();
        let time = (0..n as i64).collect();
        let open = self.open.unwrap_or_else(|| self.close.clone());
        let high = self.high.unwrap_or_else(|| self.close.clone());
        let low = self.low.unwrap_or_else(|| self.close.clone());
        let volume = self.volume.unwrap_or_else(|| vec![1.0; n]);
        OhlcvSeries::from_columns(time, open, high, low, self.close, volume)
            .expect("fixture columns must be consistent")
    }
}

fn load_fixture(path: &Path) -> FixtureFile {
    let content = fs::read_to_string(path).expect("Failed to read fixture file");
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid fixture {}: {e}", path.display()))
}

fn compare_values(case: &str, what: &str, actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{case}: {what} has {} elements, expected {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            approx_eq(*a, *e, LOOSE_EPSILON),
            "{case}: {what}[{i}] = {a}, expected {e}"
        );
    }
}

fn run_case(case: FixtureCase) {
    let name = case.name;
    let series = case.input.into_series();
    let range = case
        .range
        .map_or_else(|| IndexRange::full(series.len()), |[s, e]| IndexRange::new(s, e));

    let result = case.indicator.compute(&series, range);

    match (case.expected, case.error) {
        (Some(expected), None) => {
            let out = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
            assert_eq!(out.begin_index(), expected.begin, "{name}: begin index");
            compare_values(&name, "values", out.values(), &expected.values);
            for (key, values) in &expected.series {
                let actual = out
                    .series(*key)
                    .unwrap_or_else(|| panic!("{name}: missing series {}", key.as_str()));
                compare_values(&name, key.as_str(), actual, values);
            }
        }
        (None, Some(code)) => {
            let err = result.expect_err(&format!("{name}: expected {code}"));
            assert_eq!(err.code().as_str(), code, "{name}: {err}");
        }
        _ => panic!("{name}: a case needs exactly one of `expected` and `error`"),
    }
}

fn run_fixture_file(file: &str) {
    let fixture = load_fixture(&fixtures_dir().join(file));
    assert!(!fixture.cases.is_empty(), "{file} has no cases");
    for case in fixture.cases {
        run_case(case);
    }
}

// ==================== Fixture Files ====================

#[test]
fn fixture_moving_averages() {
    run_fixture_file("moving_averages.json");
}

#[test]
fn fixture_oscillators() {
    run_fixture_file("oscillators.json");
}

#[test]
fn fixture_errors() {
    run_fixture_file("errors.json");
}

#[test]
fn fixture_directory_fully_covered() {
    let mut files: Vec<String> = fs::read_dir(fixtures_dir())
        .expect("fixtures directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    files.sort();
    assert_eq!(
        files,
        ["errors.json", "moving_averages.json", "oscillators.json"]
    );
}

// ==================== Configuration Round Trip ====================

#[test]
fn fixture_indicators_form_a_valid_set() {
    // every indicator used by the fixtures can be named in a configuration
    let mut set = IndicatorSet::default();
    for file in ["moving_averages.json", "oscillators.json"] {
        for case in load_fixture(&fixtures_dir().join(file)).cases {
            set.push(case.name, case.indicator).unwrap();
        }
    }
    let json = set.to_json_string().unwrap();
    assert_eq!(IndicatorSet::from_json_str(&json).unwrap(), set);
}
