//! Error types for loading crate documents.

use std::io;

/// Error returned when a crate document cannot be loaded.
///
/// Conformance problems are not errors: they are reported by
/// [`ValidationReport`](crate::ValidationReport).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CrateLoadError {
    /// I/O error while reading the document (file not found...).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The document is not valid JSON.
    #[error("invalid JSON at line {line}, column {column}: {source}")]
    Json {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The document is valid JSON but not an object.
    #[error("crate metadata should be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

impl From<serde_json::Error> for CrateLoadError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return Self::Io(error.into());
        }
        Self::Json {
            line: error.line(),
            column: error.column(),
            source: error,
        }
    }
}

impl From<CrateLoadError> for io::Error {
    #[inline]
    fn from(error: CrateLoadError) -> Self {
        match error {
            CrateLoadError::Io(error) => error,
            CrateLoadError::Json { source, .. } => Self::new(io::ErrorKind::InvalidData, source),
            error @ CrateLoadError::NotAnObject { .. } => {
                Self::new(io::ErrorKind::InvalidData, error)
            }
        }
    }
}
