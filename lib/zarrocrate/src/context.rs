//! `@context` checks.
//!
//! A crate must reference one of the RO-Crate base contexts and define every
//! term of [`REQUIRED_TERMS`] inline. Additional context entries are allowed.

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::report::ValidationReport;

/// RO-Crate base contexts accepted by the profile.
pub const BASE_CONTEXTS: [&str; 2] = [
    "https://w3id.org/ro/crate/1.1/context",
    "https://w3id.org/ro/crate/1.2/context",
];

/// Expected definition of a context term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermDefinition {
    /// The term expands to this IRI.
    Iri(&'static str),
    /// The term is the reverse of `reverse`, with values of type `type_mapping`.
    Reverse {
        reverse: &'static str,
        type_mapping: &'static str,
    },
}

impl TermDefinition {
    /// Returns true if the JSON definition is exactly this one.
    pub fn matches(&self, definition: &Value) -> bool {
        match *self {
            Self::Iri(iri) => definition.as_str() == Some(iri),
            Self::Reverse {
                reverse,
                type_mapping,
            } => definition.as_object().is_some_and(|object| {
                object.len() == 2
                    && object.get("@reverse").and_then(Value::as_str) == Some(reverse)
                    && object.get("@type").and_then(Value::as_str) == Some(type_mapping)
            }),
        }
    }

    /// The JSON form of this definition, as it should appear in a context.
    pub fn to_json(&self) -> Value {
        match *self {
            Self::Iri(iri) => Value::from(iri),
            Self::Reverse {
                reverse,
                type_mapping,
            } => serde_json::json!({"@reverse": reverse, "@type": type_mapping}),
        }
    }
}

/// Terms every OME-Zarr crate context must define, in reporting order.
///
/// `acquisiton_method` is spelled as existing crates spell it.
pub const REQUIRED_TERMS: [(&str, TermDefinition); 10] = [
    (
        "organism_classification",
        TermDefinition::Iri("https://schema.org/taxonomicRange"),
    ),
    (
        "BioChemEntity",
        TermDefinition::Iri("https://schema.org/BioChemEntity"),
    ),
    ("channel", TermDefinition::Iri("https://w3id.org/rembi/channel")),
    ("obo", TermDefinition::Iri("http://purl.obolibrary.org/obo/")),
    ("FBcv", TermDefinition::Iri("http://purl.obolibrary.org/obo/FBcv_")),
    (
        "acquisiton_method",
        TermDefinition::Reverse {
            reverse: "https://schema.org/result",
            type_mapping: "@id",
        },
    ),
    (
        "biological_entity",
        TermDefinition::Iri("https://w3id.org/rembi/biological_entity"),
    ),
    ("biosample", TermDefinition::Iri("https://w3id.org/rembi/biosample")),
    (
        "preparation_method",
        TermDefinition::Iri("https://w3id.org/rembi/preparation_method"),
    ),
    ("specimen", TermDefinition::Iri("https://w3id.org/rembi/specimen")),
];

/// Returns true if the identifier is a recognized base context.
pub fn is_base_context(identifier: &str) -> bool {
    BASE_CONTEXTS.contains(&identifier)
}

/// Checks the `@context` of a crate document.
pub fn check_context(context: Option<&Value>, report: &mut ValidationReport) {
    let terms = match context {
        Some(Value::Array(entries)) => {
            let mut terms = FxHashMap::default();
            let mut base_found = false;
            for entry in entries {
                match entry {
                    Value::String(identifier) => base_found |= is_base_context(identifier),
                    Value::Object(mapping) => {
                        terms.extend(mapping.iter().map(|(k, v)| (k.as_str(), v)));
                    }
                    _ => (),
                }
            }
            if !base_found {
                report.error("context missing known RO-Crate context (1.1 or 1.2)");
            }
            terms
        }
        Some(Value::String(identifier)) => {
            if !is_base_context(identifier) {
                report.error("context missing known RO-Crate context (1.1 or 1.2)");
            }
            FxHashMap::default()
        }
        _ => {
            report.error("@context should be a string or list");
            return;
        }
    };

    let missing = missing_terms(&terms);
    if !missing.is_empty() {
        report.error(format!(
            "context missing required OME-Zarr term definitions: {}",
            missing.join(", ")
        ));
    }
}

/// Required terms absent from `terms` or defined differently, in table order.
fn missing_terms(terms: &FxHashMap<&str, &Value>) -> Vec<&'static str> {
    REQUIRED_TERMS
        .iter()
        .filter(|(name, definition)| {
            !terms
                .get(name)
                .is_some_and(|actual| definition.matches(actual))
        })
        .map(|(name, _)| *name)
        .collect()
}
