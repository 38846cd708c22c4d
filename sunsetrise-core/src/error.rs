//! Error types for sunsetrise.

use thiserror::Error;

/// Errors that can occur in sunsetrise operations.
///
/// Missing anchors and missing coordinates are not errors: they are recovered
/// inside the core by dropping the window or degrading the description.
#[derive(Error, Debug)]
pub enum SunsetriseError {
    #[error("Unknown language '{0}'. Supported: en, es")]
    UnknownLanguage(String),

    #[error("Ephemeris error: {0}")]
    Ephemeris(String),

    #[error("CSV generation error: {0}")]
    CsvGenerate(String),
}

/// Result type alias for sunsetrise operations.
pub type SunsetriseResult<T> = Result<T, SunsetriseError>;
