//! Declarative field rules.
//!
//! Each entity kind with mandatory fields has a table of [`FieldRule`]s. The
//! validators evaluate the tables and turn the outcome into findings, so adding
//! a required field only means adding a row.

use serde_json::Value;

use crate::entity::{Entity, is_reference};

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Recommended,
}

/// A predicate on the value of a field, with the message reported when it fails.
///
/// The predicate receives `None` when the field is absent.
#[derive(Debug, Clone, Copy)]
pub struct ShapeCheck {
    pub predicate: fn(Option<&Value>) -> bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub requirement: Requirement,
    pub shape: Option<ShapeCheck>,
}

impl FieldRule {
    const fn required(field: &'static str) -> Self {
        Self {
            field,
            requirement: Requirement::Required,
            shape: None,
        }
    }

    const fn recommended(field: &'static str) -> Self {
        Self {
            field,
            requirement: Requirement::Recommended,
            shape: None,
        }
    }

    const fn with_shape(
        mut self,
        predicate: fn(Option<&Value>) -> bool,
        message: &'static str,
    ) -> Self {
        self.shape = Some(ShapeCheck { predicate, message });
        self
    }
}

/// Fields of the root dataset.
pub const ROOT_DATASET_RULES: &[FieldRule] = &[
    FieldRule::required("name"),
    FieldRule::required("description"),
    FieldRule::required("license"),
    FieldRule::required("resultOf").with_shape(
        is_reference_value,
        "root dataset resultOf should point to an @id",
    ),
];

/// Profile declaration expected on the root dataset.
pub const ROOT_PROFILE_RULES: &[FieldRule] = &[FieldRule::recommended("conformsTo")];

/// Fields of the biosample at the end of the chain.
pub const BIOSAMPLE_RULES: &[FieldRule] = &[FieldRule::required("organism_classification")];

/// Fields of the `PropertyValue` entities listed in `additionalProperty`.
pub const PROPERTY_VALUE_RULES: &[FieldRule] =
    &[FieldRule::required("name"), FieldRule::required("value")];

fn is_reference_value(value: Option<&Value>) -> bool {
    value.is_some_and(is_reference)
}

/// Result of evaluating a rule table against one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Required fields that are absent, in table order.
    pub missing: Vec<&'static str>,
    /// Recommended fields that are absent, in table order.
    pub recommended: Vec<&'static str>,
    /// Messages of the shape checks that failed, in table order.
    pub malformed: Vec<&'static str>,
}

impl RuleOutcome {
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty() && self.malformed.is_empty()
    }
}

/// Evaluates every rule of the table independently.
pub fn evaluate(entity: &Entity<'_>, rules: &[FieldRule]) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    for rule in rules {
        let value = entity.get(rule.field);
        if value.is_none() {
            match rule.requirement {
                Requirement::Required => outcome.missing.push(rule.field),
                Requirement::Recommended => outcome.recommended.push(rule.field),
            }
        }
        if let Some(shape) = rule.shape {
            if !(shape.predicate)(value) {
                outcome.malformed.push(shape.message);
            }
        }
    }
    outcome
}
