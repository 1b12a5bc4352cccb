//! The metadata descriptor (`ro-crate-metadata.json`) and the root profile declaration.

use crate::entity::{Entity, EntityKind, METADATA_DESCRIPTOR_ID, ROOT_ID, is_reference};
use crate::index::GraphIndex;
use crate::report::ValidationReport;
use crate::rules::{ROOT_PROFILE_RULES, evaluate};

pub fn check_metadata_descriptor(index: &GraphIndex<'_>, report: &mut ValidationReport) {
    let Some(descriptor) = index.get(METADATA_DESCRIPTOR_ID) else {
        report.error(format!(
            "metadata descriptor '{METADATA_DESCRIPTOR_ID}' not found"
        ));
        return;
    };
    if !descriptor.is(EntityKind::CreativeWork) {
        report.error("metadata descriptor missing @type CreativeWork");
    }
    if descriptor.reference("about") != Some(ROOT_ID) {
        report.error("metadata descriptor about should be './'");
    }
    if !descriptor.get("conformsTo").is_some_and(is_reference) {
        report.warning("metadata descriptor conformsTo should be an object with @id");
    }
}

/// Warns when the root dataset does not declare the profile it conforms to.
pub fn check_root_profile(root: &Entity<'_>, report: &mut ValidationReport) {
    if !evaluate(root, ROOT_PROFILE_RULES).recommended.is_empty() {
        report.warning("root dataset missing profile conformsTo (SHOULD)");
    }
}
