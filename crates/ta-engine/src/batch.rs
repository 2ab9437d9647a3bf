//! Batch execution of many indicator calls.
//!
//! Indicator calls share no state, so a batch can run them on any number of
//! threads. With the `parallel` feature enabled, batches at or above a size
//! threshold run on Rayon's thread pool; smaller batches, and every batch
//! without the feature, run sequentially. Results always keep input order and
//! the first error aborts the batch.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! ta-engine = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use ta_engine::batch::BatchProcessor;
//! use ta_engine::indicators::sma;
//! use ta_engine::validation::IndexRange;
//!
//! let series = vec![
//!     vec![1.0_f64, 2.0, 3.0, 4.0, 5.0],
//!     vec![5.0, 4.0, 3.0, 2.0, 1.0],
//! ];
//!
//! let results = BatchProcessor::new()
//!     .process(&series, |s| sma(s, IndexRange::full(s.len()), 3))
//!     .unwrap();
//! assert_eq!(results[1].values(), &[4.0, 3.0, 2.0]);
//! ```

use tracing::debug;

use crate::config::IndicatorSet;
use crate::engine::Indicator;
use crate::error::Result;
use crate::ohlcv::OhlcvSeries;
use crate::output::IndicatorOutput;
use crate::traits::SeriesElement;
use crate::validation::IndexRange;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs batches of indicator computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProcessor {
    /// Smallest batch that is split across threads.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a processor that parallelizes batches of 8 or more items.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 8,
        }
    }

    /// Sets the smallest batch that is split across threads.
    ///
    /// Has no effect without the `parallel` feature.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Applies `indicator_fn` to every series.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `indicator_fn`.
    pub fn process<T, F, R>(&self, series: &[Vec<T>], indicator_fn: F) -> Result<Vec<R>>
    where
        T: SeriesElement,
        F: Fn(&[T]) -> Result<R> + Send + Sync,
        R: Send,
    {
        self.map_all(series, |s| indicator_fn(s))
    }

    /// Runs every indicator over the same `range` of one series.
    ///
    /// # Errors
    ///
    /// Returns the first error any indicator reports.
    pub fn run<T: SeriesElement>(
        &self,
        indicators: &[Indicator],
        series: &OhlcvSeries<T>,
        range: IndexRange,
    ) -> Result<Vec<IndicatorOutput<T>>> {
        self.map_all(indicators, |indicator| indicator.compute(series, range))
    }

    /// Runs a configured indicator set, pairing each output with its id.
    ///
    /// # Errors
    ///
    /// Returns the first error any indicator reports.
    pub fn run_set<'a, T: SeriesElement>(
        &self,
        set: &'a IndicatorSet,
        series: &OhlcvSeries<T>,
        range: IndexRange,
    ) -> Result<Vec<(&'a str, IndicatorOutput<T>)>> {
        self.map_all(&set.indicators, |entry| {
            entry
                .indicator
                .compute(series, range)
                .map(|out| (entry.id.as_str(), out))
        })
    }

    /// Runs one indicator over the whole of each series.
    ///
    /// # Errors
    ///
    /// Returns the first error the indicator reports.
    pub fn run_across<T: SeriesElement>(
        &self,
        indicator: &Indicator,
        series: &[OhlcvSeries<T>],
    ) -> Result<Vec<IndicatorOutput<T>>> {
        self.map_all(series, |s| {
            indicator.compute(s, IndexRange::full(s.len()))
        })
    }

    #[cfg(feature = "parallel")]
    fn map_all<'a, I, R, F>(&self, items: &'a [I], f: F) -> Result<Vec<R>>
    where
        I: Sync,
        R: Send,
        F: Fn(&'a I) -> Result<R> + Send + Sync,
    {
        if items.len() < self.min_parallel_threshold {
            return map_sequential(items, f);
        }
        debug!(items = items.len(), "running batch in parallel");
        items.par_iter().map(f).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn map_all<'a, I, R, F>(&self, items: &'a [I], f: F) -> Result<Vec<R>>
    where
        F: Fn(&'a I) -> Result<R>,
    {
        map_sequential(items, f)
    }
}

fn map_sequential<'a, I, R, F>(items: &'a [I], f: F) -> Result<Vec<R>>
where
    F: Fn(&'a I) -> Result<R>,
{
    debug!(items = items.len(), "running batch sequentially");
    items.iter().map(f).collect()
}
