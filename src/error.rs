//! Error types for the circuit calculator.
//!
//! This module provides a unified error type [`CalcError`] that covers
//! series construction, input validation and CLI value parsing. The
//! matcher itself never fails; bad input is rejected before a search starts.

use thiserror::Error;

/// Result type alias using [`CalcError`].
pub type Result<T> = std::result::Result<T, CalcError>;

/// Unified error type for all calculator operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    // ============ Series Errors ============
    /// Requested factor count has no preferred value table
    #[error("Unsupported series E{count} (supported: {supported})")]
    UnsupportedSeries { count: usize, supported: String },

    /// Series selector text could not be parsed
    #[error("Unknown series name '{name}' (expected e.g. 'E24' or '24')")]
    UnknownSeriesName { name: String },

    /// Index outside of the addressable series
    #[error("Index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Custom factor table violates the series invariants
    #[error("Invalid series factors: {message}")]
    InvalidFactors { message: String },

    // ============ Input Errors ============
    /// Threshold voltage or reference voltage is unusable
    #[error("Invalid threshold: {message}")]
    InvalidThreshold { message: String },

    /// Ratio coefficients cannot be matched
    #[error("Invalid ratio coefficients: {message}")]
    InvalidCoefficients { message: String },

    /// Matcher settings are unusable
    #[error("Invalid matcher configuration: {message}")]
    InvalidConfig { message: String },

    /// Numeric text could not be parsed
    #[error("Invalid value '{text}'")]
    InvalidValue { text: String },
}

impl CalcError {
    /// Create an unsupported series error
    pub fn unsupported_series(count: usize, supported: &[usize]) -> Self {
        let supported = supported
            .iter()
            .map(|n| format!("E{}", n))
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnsupportedSeries { count, supported }
    }

    /// Create an invalid factors error
    pub fn invalid_factors(message: impl Into<String>) -> Self {
        Self::InvalidFactors {
            message: message.into(),
        }
    }

    /// Create an invalid threshold error
    pub fn invalid_threshold(message: impl Into<String>) -> Self {
        Self::InvalidThreshold {
            message: message.into(),
        }
    }

    /// Create an invalid coefficients error
    pub fn invalid_coefficients(message: impl Into<String>) -> Self {
        Self::InvalidCoefficients {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
