//! Validation of a whole crate document.

use serde_json::Value;
use std::ops::ControlFlow;

use crate::chain::check_chain;
use crate::context::check_context;
use crate::descriptor::{check_metadata_descriptor, check_root_profile};
use crate::index::GraphIndex;
use crate::property::check_additional_properties;
use crate::report::ValidationReport;

/// Validator for OME-Zarr RO-Crate metadata documents.
///
/// Validation is a pure function of the document: the same document always
/// gives the same report, and the document is never modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrateValidator;

impl CrateValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates an already parsed crate document.
    ///
    /// The checks run in order: `@context`, the root → acquisition → specimen →
    /// biosample chain, `additionalProperty` annotations, the metadata descriptor
    /// and finally the root profile declaration. If the chain has no root dataset,
    /// no acquisition or no specimen, the report is returned right after the chain
    /// check.
    pub fn validate(&self, document: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        let index = GraphIndex::new(document);
        tracing::debug!(entities = index.len(), "indexed crate graph");

        check_context(document.get("@context"), &mut report);

        let ControlFlow::Continue(root) = check_chain(&index, &mut report) else {
            tracing::debug!(
                errors = report.error_count(),
                "provenance chain is broken, skipping remaining checks"
            );
            return report;
        };
        check_additional_properties(&root, &index, &mut report);
        check_metadata_descriptor(&index, &mut report);
        check_root_profile(&root, &mut report);

        tracing::debug!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            "crate validated"
        );
        report
    }
}

/// Validates a crate document with the default [`CrateValidator`].
pub fn validate(document: &Value) -> ValidationReport {
    CrateValidator::new().validate(document)
}
