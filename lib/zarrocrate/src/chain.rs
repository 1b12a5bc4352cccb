//! Root dataset → acquisition → specimen → biosample chain.
//!
//! The walk has a fixed depth of three hops, so cyclic references cannot make
//! it loop.

use std::ops::ControlFlow;

use crate::entity::{Entity, EntityKind, ROOT_ID};
use crate::index::GraphIndex;
use crate::report::ValidationReport;
use crate::rules::{BIOSAMPLE_RULES, ROOT_DATASET_RULES, evaluate};

/// Validates the provenance chain starting at the root dataset.
///
/// Breaks when the chain cannot be followed any further (no root dataset, no
/// acquisition or no specimen); the remaining checks of the run are then
/// pointless. A missing biosample does not break.
pub fn check_chain<'a>(
    index: &GraphIndex<'a>,
    report: &mut ValidationReport,
) -> ControlFlow<(), Entity<'a>> {
    let Some(root) = index.get(ROOT_ID).copied() else {
        report.error("metadata.json missing root dataset './'");
        return ControlFlow::Break(());
    };
    let outcome = evaluate(&root, ROOT_DATASET_RULES);
    for field in outcome.missing {
        report.error(format!("metadata.json's root dataset missing {field}"));
    }
    for message in outcome.malformed {
        report.error(message);
    }

    let Some(acquisition) = follow(index, &root, "resultOf") else {
        report.error("resultOf target not found");
        return ControlFlow::Break(());
    };
    if !acquisition.is(EntityKind::ImageAcquisition) {
        report.error("acquisition missing @type image_acquisition");
    }

    let Some(specimen) = follow(index, acquisition, "specimen") else {
        report.error("specimen not found");
        return ControlFlow::Break(());
    };
    if !specimen.is(EntityKind::Specimen) {
        report.error("specimen missing @type specimen");
    }

    match follow(index, specimen, "biosample") {
        Some(biosample) => {
            if !biosample.is(EntityKind::Biosample) {
                report.error("biosample missing @type biosample");
            }
            for field in evaluate(biosample, BIOSAMPLE_RULES).missing {
                report.error(format!("biosample missing {field}"));
            }
        }
        None => report.error("biosample not found"),
    }

    ControlFlow::Continue(root)
}

/// Resolves the reference held by `property` of `entity`.
fn follow<'i, 'a>(
    index: &'i GraphIndex<'a>,
    entity: &Entity<'a>,
    property: &str,
) -> Option<&'i Entity<'a>> {
    index.get(entity.reference(property)?)
}
