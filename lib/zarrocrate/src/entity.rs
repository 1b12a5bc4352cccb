//! Tagged view over the entities of a JSON-LD graph.
//!
//! Entities stay borrowed from the parsed document: an [`Entity`] is a typed
//! handle on a JSON object, tagged with the [`EntityKind`] its `@type` declares.

use serde_json::{Map, Value};

/// Identifier of the root dataset.
pub const ROOT_ID: &str = "./";

/// Identifier of the entity describing the metadata file itself.
pub const METADATA_DESCRIPTOR_ID: &str = "ro-crate-metadata.json";

/// Kind of an entity, derived from its `@type` tag.
///
/// Only a single string `@type` is recognized. Arrays or other values make
/// the entity [`EntityKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Dataset,
    File,
    CreativeWork,
    ImageAcquisition,
    Specimen,
    Biosample,
    PropertyValue,
    Unknown,
}

impl EntityKind {
    /// The `@type` value tagging this kind, if any.
    pub fn type_name(self) -> Option<&'static str> {
        match self {
            Self::Dataset => Some("Dataset"),
            Self::File => Some("File"),
            Self::CreativeWork => Some("CreativeWork"),
            Self::ImageAcquisition => Some("image_acquisition"),
            Self::Specimen => Some("specimen"),
            Self::Biosample => Some("biosample"),
            Self::PropertyValue => Some("PropertyValue"),
            Self::Unknown => None,
        }
    }

    /// Classifies a `@type` value. Matching is exact and case-sensitive.
    pub fn from_type(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("Dataset") => Self::Dataset,
            Some("File") => Self::File,
            Some("CreativeWork") => Self::CreativeWork,
            Some("image_acquisition") => Self::ImageAcquisition,
            Some("specimen") => Self::Specimen,
            Some("biosample") => Self::Biosample,
            Some("PropertyValue") => Self::PropertyValue,
            _ => Self::Unknown,
        }
    }
}

/// A borrowed entity of the graph.
#[derive(Debug, Clone, Copy)]
pub struct Entity<'a> {
    id: &'a str,
    kind: EntityKind,
    properties: &'a Map<String, Value>,
}

impl<'a> Entity<'a> {
    /// Wraps a JSON value if it is an object with a string `@id`.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let properties = value.as_object()?;
        let id = properties.get("@id")?.as_str()?;
        Some(Self {
            id,
            kind: EntityKind::from_type(properties.get("@type")),
            properties,
        })
    }

    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns true if this entity is tagged with the given kind.
    pub fn is(&self, kind: EntityKind) -> bool {
        self.kind == kind
    }

    /// Returns true if the property is declared, whatever its value.
    pub fn has(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn get(&self, property: &str) -> Option<&'a Value> {
        self.properties.get(property)
    }

    /// The identifier the given property points to, if it is a reference.
    pub fn reference(&self, property: &str) -> Option<&'a str> {
        reference_id(self.get(property)?)
    }

    pub fn properties(&self) -> &'a Map<String, Value> {
        self.properties
    }
}

/// Returns the target of a `{"@id": ...}` reference with a string identifier.
pub fn reference_id(value: &Value) -> Option<&str> {
    value.as_object()?.get("@id")?.as_str()
}

/// Returns true if the value is an object declaring `@id`, whatever its value.
pub fn is_reference(value: &Value) -> bool {
    value.as_object().is_some_and(|object| object.contains_key("@id"))
}
