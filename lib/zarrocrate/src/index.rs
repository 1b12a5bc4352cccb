//! Identifier index over the `@graph` of a crate.

use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

use crate::entity::{Entity, reference_id};

/// Maps each `@id` of the graph to its entity.
///
/// Entities that are not objects or that lack a string `@id` are left out:
/// nothing can reference them. When an identifier occurs twice, the last
/// occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex<'a> {
    entities: FxHashMap<&'a str, Entity<'a>>,
    duplicates: FxHashSet<&'a str>,
}

impl<'a> GraphIndex<'a> {
    /// Indexes the `@graph` member of a crate document.
    ///
    /// A missing or non-list `@graph` gives an empty index.
    pub fn new(document: &'a Value) -> Self {
        match document.get("@graph").and_then(Value::as_array) {
            Some(graph) => Self::from_graph(graph),
            None => Self::default(),
        }
    }

    /// Indexes a sequence of entity objects.
    pub fn from_graph(graph: &'a [Value]) -> Self {
        let mut index = Self::default();
        for entity in graph.iter().filter_map(Entity::from_value) {
            if index.entities.insert(entity.id(), entity).is_some() {
                tracing::debug!(id = entity.id(), "duplicate @id in graph, keeping the last one");
                index.duplicates.insert(entity.id());
            }
        }
        index
    }

    pub fn get(&self, id: &str) -> Option<&Entity<'a>> {
        self.entities.get(id)
    }

    /// Resolves a `{"@id": ...}` reference to the entity it points to.
    pub fn resolve(&self, reference: &Value) -> Option<&Entity<'a>> {
        self.get(reference_id(reference)?)
    }

    /// Identifiers declared by more than one entity.
    pub fn duplicate_ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.duplicates.iter().copied()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity<'a>> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
