//! ta-engine: technical analysis indicators over OHLCV price sequences
//!
//! This crate computes derived series (moving averages, oscillators,
//! volatility bands, trend-strength measures) from open/high/low/close/volume
//! data. Every indicator shares one indexing contract, so indicators compose:
//! the Stochastic RSI is a stochastic run over an RSI series, the MACD signal
//! is an EMA of the MACD line.
//!
//! # Features
//!
//! - **Range-based**: each call takes an inclusive [`IndexRange`] and reports
//!   where its output begins once warm-up is accounted for
//! - **TA-Lib compatible**: seeds, lookbacks and smoothing follow TA-Lib
//! - **Generics**: works with both `f32` and `f64`
//! - **No NaN surprises**: degenerate windows yield documented values
//! - **Pure**: no shared state, so calls run in parallel freely
//!   (see [`batch`] and the `parallel` feature)
//!
//! # Quick Start
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let out = sma(&data, IndexRange::full(data.len()), 3).unwrap();
//!
//! // the first two points are warm-up
//! assert_eq!(out.begin_index(), 2);
//! assert_eq!(out.values(), &[2.0, 3.0, 4.0]);
//! ```
//!
//! # Composite Output
//!
//! Indicators with more than one line put the extra lines under a
//! [`SeriesKey`], all aligned with `values`:
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let data: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.2).sin()).collect();
//! let out = macd(&data, IndexRange::full(60), 12, 26, 9).unwrap();
//!
//! assert_eq!(out.begin_index(), 33);
//! assert_eq!(out.series(SeriesKey::Signal).unwrap().len(), out.element_count());
//! ```
//!
//! # Error Handling
//!
//! Inputs are validated before any arithmetic. A failed call returns an
//! [`Error`] and no output:
//!
//! ```
//! use ta_engine::prelude::*;
//!
//! let empty: [f64; 0] = [];
//! assert!(sma(&empty, IndexRange::new(0, 0), 5).is_err());
//!
//! let data = [1.0_f64, 2.0, 3.0];
//! let err = sma(&data, IndexRange::new(0, 3), 2).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::OutOfRangeEndIndex);
//!
//! // warm-up that swallows the range is not an error
//! let out = sma(&data, IndexRange::full(3), 10).unwrap();
//! assert!(out.is_empty());
//! ```
//!
//! # Engine and Configuration
//!
//! [`engine::Indicator`] wraps every indicator behind one `compute` call over
//! an [`ohlcv::OhlcvSeries`], and [`config::IndicatorSet`] loads named
//! indicators from JSON.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod config;
pub mod engine;
pub mod error;
pub mod indicators;
pub mod kernels;
pub mod ohlcv;
pub mod output;
pub mod prelude;
pub mod traits;
pub mod utils;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, ErrorCode, InvalidParameter, Result};
pub use output::{IndicatorOutput, SeriesKey};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, EPSILON, LOOSE_EPSILON};
pub use validation::IndexRange;
