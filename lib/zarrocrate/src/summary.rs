//! Overview of the datasets and files described by a crate.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::entity::{EntityKind, reference_id};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub has_part: Vec<String>,
    pub additional_property: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub id: String,
    pub encoding_format: String,
}

/// The `Dataset` and `File` entities of a crate, in graph order.
///
/// Unlike validation, summarizing does not need identifiers to be unique or
/// even present: every entity with a matching `@type` is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrateSummary {
    pub datasets: Vec<DatasetSummary>,
    pub files: Vec<FileSummary>,
}

impl CrateSummary {
    pub fn from_document(document: &Value) -> Self {
        let mut summary = Self::default();
        let Some(graph) = document.get("@graph").and_then(Value::as_array) else {
            return summary;
        };
        for entity in graph {
            match EntityKind::from_type(entity.get("@type")) {
                EntityKind::Dataset => summary.datasets.push(DatasetSummary {
                    id: text(entity.get("@id")),
                    name: text(entity.get("name")),
                    license: entity.get("license").map(|license| text(Some(license))),
                    has_part: reference_list(entity.get("hasPart")),
                    additional_property: reference_list(entity.get("additionalProperty")),
                }),
                EntityKind::File => summary.files.push(FileSummary {
                    id: text(entity.get("@id")),
                    encoding_format: text(entity.get("encodingFormat")),
                }),
                _ => (),
            }
        }
        summary
    }
}

/// Renders a value for display: strings as is, references as their target.
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(value)) => value.clone(),
        Some(value) => reference_id(value).map_or_else(|| value.to_string(), str::to_owned),
    }
}

fn reference_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(reference_id)
        .map(str::to_owned)
        .collect()
}

impl fmt::Display for CrateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Datasets:")?;
        for dataset in &self.datasets {
            writeln!(f, " - {}: {}", dataset.id, dataset.name)?;
            if let Some(license) = &dataset.license {
                writeln!(f, "   license: {license}")?;
            }
            if !dataset.has_part.is_empty() {
                writeln!(f, "   hasPart: {}", dataset.has_part.join(", "))?;
            }
            if !dataset.additional_property.is_empty() {
                writeln!(
                    f,
                    "   additionalProperty: {}",
                    dataset.additional_property.join(", ")
                )?;
            }
        }
        if self.datasets.is_empty() {
            writeln!(f, " - none found")?;
        }

        writeln!(f, "\nFiles:")?;
        for file in &self.files {
            writeln!(f, " - {}: {}", file.id, file.encoding_format)?;
        }
        if self.files.is_empty() {
            writeln!(f, " - none found")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary() {
        let document = json!({"@graph": [
            {
                "@id": "./",
                "@type": "Dataset",
                "name": "Mouse brain",
                "license": {"@id": "https://creativecommons.org/licenses/by/4.0/"},
                "hasPart": [{"@id": "image.ome.zarr/"}, "loose"],
                "additionalProperty": [{"@id": "#pv"}]
            },
            {"@id": "image.ome.zarr/", "@type": "File", "encodingFormat": "application/zarr"},
            {"@id": "#pv", "@type": "PropertyValue", "name": "n", "value": 1}
        ]});
        let summary = CrateSummary::from_document(&document);
        assert_eq!(summary.datasets.len(), 1);
        assert_eq!(summary.files.len(), 1);
        assert_eq!(
            summary.to_string(),
            "Datasets:\n \
             - ./: Mouse brain\n   \
             license: https://creativecommons.org/licenses/by/4.0/\n   \
             hasPart: image.ome.zarr/\n   \
             additionalProperty: #pv\n\
             \n\
             Files:\n \
             - image.ome.zarr/: application/zarr\n"
        );
    }

    #[test]
    fn test_empty_summary() {
        let summary = CrateSummary::from_document(&json!({}));
        assert_eq!(
            summary.to_string(),
            "Datasets:\n - none found\n\nFiles:\n - none found\n"
        );
    }

    #[test]
    fn test_summary_to_json() {
        let document = json!({"@graph": [{"@id": "a.tif", "@type": "File"}]});
        let json = serde_json::to_value(CrateSummary::from_document(&document)).unwrap();
        assert_eq!(
            json,
            json!({"datasets": [], "files": [{"id": "a.tif", "encoding_format": ""}]})
        );
    }
}
