//! Error types for the payroll compliance engine.
//!
//! Validators and calculators never fail: they return tagged results. This
//! error type covers the surfaces that can: loading statutory configuration
//! and the caller-side input guards used in front of the calculators.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll compliance engine.
///
/// # Example
///
/// ```
/// use payroll_compliance::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/statutory.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A regional professional tax table does not partition `[0, ∞)`.
    #[error("Invalid professional tax table for region '{region}': {message}")]
    InvalidTaxTable {
        /// The region key of the offending table.
        region: String,
        /// What is wrong with the slabs.
        message: String,
    },

    /// A statutory rate or share lies outside `[0, 1]`.
    #[error("Invalid rate '{name}': {value} is outside [0, 1]")]
    InvalidRate {
        /// The configuration key of the rate.
        name: String,
        /// The offending value.
        value: Decimal,
    },

    /// A caller supplied an input the engine refuses to compute with.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// Why the field was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
