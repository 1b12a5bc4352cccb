//! `additionalProperty` annotations of the root dataset.
//!
//! Malformed annotations never invalidate a crate: every finding here is a warning.

use serde_json::Value;

use crate::entity::{Entity, EntityKind};
use crate::index::GraphIndex;
use crate::report::ValidationReport;
use crate::rules::{PROPERTY_VALUE_RULES, evaluate};

pub fn check_additional_properties(
    root: &Entity<'_>,
    index: &GraphIndex<'_>,
    report: &mut ValidationReport,
) {
    let references = match root.get("additionalProperty") {
        None => return,
        Some(Value::Array(references)) => references,
        Some(_) => {
            report.warning("additionalProperty should be a list of references");
            return;
        }
    };
    for reference in references {
        let Some(id) = reference.as_object().and_then(|r| r.get("@id")) else {
            report.warning("additionalProperty entries should be objects with @id");
            continue;
        };
        let Some(property) = id.as_str().and_then(|id| index.get(id)) else {
            report.warning(format!(
                "additionalProperty target {} not found",
                display_id(id)
            ));
            continue;
        };
        let id = property.id();
        if !property.is(EntityKind::PropertyValue) {
            report.warning(format!("{id}: expected @type PropertyValue"));
        }
        if !evaluate(property, PROPERTY_VALUE_RULES).missing.is_empty() {
            report.warning(format!("{id}: PropertyValue missing name or value"));
        }
    }
}

fn display_id(id: &Value) -> String {
    match id {
        Value::String(id) => id.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(document: &Value) -> ValidationReport {
        let index = GraphIndex::new(document);
        let mut report = ValidationReport::new();
        let root = *index.get("./").unwrap();
        check_additional_properties(&root, &index, &mut report);
        report
    }

    #[test]
    fn test_absent_is_noop() {
        let report = check(&json!({"@graph": [{"@id": "./"}]}));
        assert!(report.is_empty());
    }

    #[test]
    fn test_well_formed() {
        let report = check(&json!({"@graph": [
            {"@id": "./", "additionalProperty": [{"@id": "#pv"}]},
            {"@id": "#pv", "@type": "PropertyValue", "name": "pixel size", "value": 0.5}
        ]}));
        assert!(report.is_empty(), "{report:?}");
    }

    #[test]
    fn test_findings_are_warnings() {
        let report = check(&json!({"@graph": [
            {"@id": "./", "additionalProperty": [
                "#pv",
                {"name": "inline"},
                {"@id": "#missing"},
                {"@id": 7},
                {"@id": "#thing"},
                {"@id": "#partial"}
            ]},
            {"@id": "#thing", "@type": "Thing", "name": "n", "value": 1},
            {"@id": "#partial", "@type": "PropertyValue", "name": "n"}
        ]}));
        assert!(report.conforms());
        assert_eq!(
            report.warnings(),
            [
                "additionalProperty entries should be objects with @id",
                "additionalProperty entries should be objects with @id",
                "additionalProperty target #missing not found",
                "additionalProperty target 7 not found",
                "#thing: expected @type PropertyValue",
                "#partial: PropertyValue missing name or value",
            ]
        );
    }

    #[test]
    fn test_not_a_list() {
        let report = check(&json!({"@graph": [
            {"@id": "./", "additionalProperty": {"@id": "#pv"}}
        ]}));
        assert_eq!(
            report.warnings(),
            ["additionalProperty should be a list of references"]
        );
    }
}
