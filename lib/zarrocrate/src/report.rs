//! Validation report.
//!
//! Findings are kept as two ordered sequences of human readable messages:
//! errors make the crate non-conformant, warnings do not.

use serde::Serialize;
use std::fmt;

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// The crate does not conform to the profile.
    #[default]
    Error,
    /// A recommended but optional condition is not met.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("Error"),
            Self::Warning => f.write_str("Warning"),
        }
    }
}

/// The outcome of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether no error was found.
    conforms: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationReport {
    /// Creates an empty, conforming report.
    pub fn new() -> Self {
        Self {
            conforms: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Appends a finding with the given severity.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Error => {
                self.conforms = false;
                self.errors.push(message.into());
            }
            Severity::Warning => self.warnings.push(message.into()),
        }
    }

    /// Appends an error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    /// Appends a warning.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Severity::Warning, message);
    }

    /// Returns true if no error was found. Warnings do not affect conformance.
    pub fn conforms(&self) -> bool {
        self.conforms
    }

    /// Errors, in the order they were found.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings, in the order they were found.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Returns true if there are neither errors nor warnings.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Splits the report into its `(errors, warnings)` sequences.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}
