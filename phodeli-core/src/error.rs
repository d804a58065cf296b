//! Error types for the fallible edges of the crate.
//!
//! Conversions and formatting are total; only parsing unit names, resolving locales, and loading
//! configuration can fail.

/// Result type for fallible measure operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Error type for fallible measure operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeasureError {
    /// A unit symbol or name was not recognized.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// A locale name is not known to the locale provider.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
