//! Error types for the estimate engine.
//!
//! The pricing arithmetic itself is total and never fails. Errors only arise
//! while loading configuration or resolving which rate profile to price with.

use thiserror::Error;

/// The main error type for the estimate engine.
///
/// # Example
///
/// ```
/// use cutting_estimator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
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

    /// A configured rate profile holds an unusable value.
    #[error("Invalid rate profile field '{field}': {message}")]
    InvalidRateProfile {
        /// The offending field, qualified by profile name.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The requested rate profile is not configured.
    #[error("Rate profile not found: {name}")]
    ProfileNotFound {
        /// The profile name that was requested.
        name: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
