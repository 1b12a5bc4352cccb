//! Loading of `ro-crate-metadata.json` documents.

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::CrateLoadError;
use crate::report::ValidationReport;
use crate::summary::CrateSummary;
use crate::validator::validate;

/// A parsed crate metadata document.
///
/// The document is only required to be a JSON object: any other structural
/// problem is reported by [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct CrateDocument {
    value: Value,
}

impl CrateDocument {
    /// Wraps an already parsed JSON value.
    pub fn new(value: Value) -> Result<Self, CrateLoadError> {
        if value.is_object() {
            Ok(Self { value })
        } else {
            Err(CrateLoadError::NotAnObject {
                found: json_kind(&value),
            })
        }
    }

    /// Parses a document from UTF-8 JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CrateLoadError> {
        Self::new(serde_json::from_slice(bytes)?)
    }

    /// Parses a document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CrateLoadError> {
        Self::new(serde_json::from_reader(BufReader::new(reader))?)
    }

    /// Reads and parses a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CrateLoadError> {
        Self::from_reader(File::open(path)?)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.value)
    }

    pub fn summarize(&self) -> CrateSummary {
        CrateSummary::from_document(&self.value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_slice() {
        let document = CrateDocument::from_slice(br#"{"@graph": []}"#).unwrap();
        assert!(document.value()["@graph"].is_array());
    }

    #[test]
    fn test_syntax_error_position() {
        let error = CrateDocument::from_slice(b"{\n  \"@graph\": [,]\n}").unwrap_err();
        match error {
            CrateLoadError::Json { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_not_an_object() {
        let error = CrateDocument::from_slice(b"[]").unwrap_err();
        assert_eq!(
            error.to_string(),
            "crate metadata should be a JSON object, found an array"
        );
    }

    #[test]
    fn test_into_io_error() {
        let error: std::io::Error = CrateDocument::from_slice(b"1").unwrap_err().into();
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"@context": "https://w3id.org/ro/crate/1.1/context"}"#)
            .unwrap();
        let document = CrateDocument::from_path(file.path()).unwrap();
        assert!(!document.validate().conforms());
    }

    #[test]
    fn test_missing_file() {
        let error = CrateDocument::from_path("/nonexistent/ro-crate-metadata.json").unwrap_err();
        assert!(matches!(error, CrateLoadError::Io(_)));
    }
}
