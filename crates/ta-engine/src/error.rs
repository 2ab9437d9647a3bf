//! Error types for ta-engine.
//!
//! Every indicator call either returns a complete [`IndicatorOutput`] or exactly
//! one [`Error`]. Errors are detected by the validation layer before any numeric
//! work starts, so a failed call never leaves a partially filled output behind.
//!
//! The variants form a small fixed taxonomy, mirrored by the flat [`ErrorCode`]
//! for callers that only need to branch on the failure class.
//!
//! [`IndicatorOutput`]: crate::output::IndicatorOutput

use thiserror::Error;

/// The main error type for ta-engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter or input series was rejected.
    ///
    /// Covers empty input, mismatched companion-array lengths, non-positive
    /// periods, non-finite band multipliers, out-of-range moving-average
    /// selectors and unparseable configuration.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),

    /// The start index lies at or beyond the end of the input.
    #[error("start index {start} out of range for input of length {len}")]
    OutOfRangeStartIndex {
        /// The requested start index.
        start: usize,
        /// Length of the input series.
        len: usize,
    },

    /// The end index precedes the start index or lies beyond the input.
    #[error("end index {end} out of range (start {start}, input length {len})")]
    OutOfRangeEndIndex {
        /// The requested start index.
        start: usize,
        /// The requested end index.
        end: usize,
        /// Length of the input series.
        len: usize,
    },

    /// An output buffer could not be reserved.
    #[error("failed to allocate output buffer of {requested} elements")]
    AllocError {
        /// Number of elements that were requested.
        requested: usize,
    },

    /// An internal invariant was violated during computation.
    ///
    /// This should not occur on validated input; it is surfaced rather than
    /// swallowed so that a bug shows up as an error instead of wrong numbers.
    #[error("internal error: {context}")]
    InternalError {
        /// Description of the violated invariant.
        context: &'static str,
    },
}

/// The reason an [`Error::InvalidParameter`] was raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidParameter {
    /// An input series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// Companion series (e.g. high/low/close) have different lengths.
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Length of the first input series.
        expected: usize,
        /// Length of the offending series.
        actual: usize,
    },

    /// A period parameter is below the indicator's minimum.
    #[error("invalid period {period} for {name}: must be at least {min}")]
    InvalidPeriod {
        /// Name of the period parameter (e.g. `"slow_period"`).
        name: &'static str,
        /// The rejected value.
        period: usize,
        /// The smallest accepted value.
        min: usize,
    },

    /// A band multiplier is NaN or infinite.
    #[error("invalid multiplier for {name}: must be finite")]
    InvalidMultiplier {
        /// Name of the multiplier parameter.
        name: &'static str,
    },

    /// A moving-average type selector is outside the known range.
    #[error("unknown moving average type {0}")]
    MaType(u32),

    /// An indicator configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Flat error classification.
///
/// Useful when an error has to cross a boundary that only understands a
/// return code (FFI, logs, metrics labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// See [`Error::InvalidParameter`].
    InvalidParameter,
    /// See [`Error::OutOfRangeStartIndex`].
    OutOfRangeStartIndex,
    /// See [`Error::OutOfRangeEndIndex`].
    OutOfRangeEndIndex,
    /// See [`Error::AllocError`].
    AllocError,
    /// See [`Error::InternalError`].
    InternalError,
}

impl ErrorCode {
    /// Returns a stable upper-case name for the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::OutOfRangeStartIndex => "OUT_OF_RANGE_START_INDEX",
            Self::OutOfRangeEndIndex => "OUT_OF_RANGE_END_INDEX",
            Self::AllocError => "ALLOC_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl Error {
    /// Returns the flat classification of this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidParameter(_) => ErrorCode::InvalidParameter,
            Self::OutOfRangeStartIndex { .. } => ErrorCode::OutOfRangeStartIndex,
            Self::OutOfRangeEndIndex { .. } => ErrorCode::OutOfRangeEndIndex,
            Self::AllocError { .. } => ErrorCode::AllocError,
            Self::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Shorthand for an [`InvalidParameter::InvalidPeriod`] error.
    #[must_use]
    pub const fn invalid_period(name: &'static str, period: usize, min: usize) -> Self {
        Self::InvalidParameter(InvalidParameter::InvalidPeriod { name, period, min })
    }
}

/// Convenience type alias for Results using the ta-engine Error type.
pub type Result<T> = std::result::Result<T, Error>;
