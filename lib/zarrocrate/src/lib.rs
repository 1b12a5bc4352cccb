#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chain;
mod context;
mod descriptor;
mod document;
mod entity;
mod error;
mod index;
mod property;
mod report;
mod rules;
mod summary;
mod validator;

pub use context::{BASE_CONTEXTS, REQUIRED_TERMS, TermDefinition};
pub use document::CrateDocument;
pub use entity::{Entity, EntityKind, METADATA_DESCRIPTOR_ID, ROOT_ID};
pub use error::CrateLoadError;
pub use index::GraphIndex;
pub use report::{Severity, ValidationReport};
pub use rules::{FieldRule, Requirement, RuleOutcome, ShapeCheck, evaluate as evaluate_rules};
pub use summary::{CrateSummary, DatasetSummary, FileSummary};
pub use validator::{CrateValidator, validate};
