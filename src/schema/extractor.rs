//! Classes and relationships from the schema visualization result.
//!
//! Node shapes are turned into classes first, each minting a uuid that is
//! remembered against the source node id. Relationship shapes are resolved
//! against that table afterwards, so every relationship points at uuids minted
//! in the same pass. The table lives in the extractor and is dropped with it.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;
use uuid::Uuid;

use super::diagnostics::{ConsistencyError, Endpoint};
use super::model::{Class, Relationship};
use crate::db::{NodeShape, RelationshipShape, SchemaVisualization};

/// Classes keyed by label, in creation order.
pub type ClassMap = IndexMap<String, Class>;

/// Relationships keyed by relationship type, in creation order.
pub type RelationshipMap = IndexMap<String, Relationship>;

/// Output of [`ClassRelationshipExtractor::extract`].
#[derive(Debug, Default)]
pub struct Extraction {
    pub classes: ClassMap,
    pub relationships: RelationshipMap,
}

/// Class reference remembered for a source node id.
#[derive(Debug)]
struct ClassRef {
    uuid: String,
    label: String,
}

/// Single-use extractor holding the source id → class uuid table for one run.
#[derive(Debug, Default)]
pub struct ClassRelationshipExtractor {
    class_refs: HashMap<i64, ClassRef>,
}

impl ClassRelationshipExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the class and relationship maps.
    ///
    /// Duplicate labels or relationship types overwrite the earlier entry in place
    /// (last write wins). A relationship whose endpoint is not among the node
    /// shapes fails the whole extraction.
    pub fn extract(
        mut self,
        visualization: &SchemaVisualization,
    ) -> Result<Extraction, ConsistencyError> {
        let mut classes = ClassMap::with_capacity(visualization.nodes.len());
        for node in &visualization.nodes {
            let class = self.make_class(node);
            if let Some(previous) = classes.insert(class.label.clone(), class) {
                debug!(label = %previous.label, "duplicate label, replacing earlier class");
            }
        }

        let mut relationships = RelationshipMap::with_capacity(visualization.relationships.len());
        for shape in &visualization.relationships {
            let relationship = self.make_relationship(shape)?;
            if let Some(previous) = relationships.insert(relationship.label.clone(), relationship) {
                debug!(
                    rel_type = %previous.label,
                    "duplicate relationship type, replacing earlier relationship"
                );
            }
        }

        Ok(Extraction {
            classes,
            relationships,
        })
    }

    fn make_class(&mut self, node: &NodeShape) -> Class {
        let uuid = mint_uuid();
        self.class_refs.insert(
            node.id,
            ClassRef {
                uuid: uuid.clone(),
                label: node.name.clone(),
            },
        );
        Class::new(node.name.clone(), uuid)
    }

    fn make_relationship(&self, shape: &RelationshipShape) -> Result<Relationship, ConsistencyError> {
        let start = self.resolve(shape, Endpoint::Start)?;
        let end = self.resolve(shape, Endpoint::End)?;

        Ok(Relationship {
            uuid: mint_uuid(),
            start: start.uuid.clone(),
            start_label: start.label.clone(),
            end_label: end.label.clone(),
            end_id: end.uuid.clone(),
            label: shape.rel_type.clone(),
        })
    }

    fn resolve(
        &self,
        shape: &RelationshipShape,
        endpoint: Endpoint,
    ) -> Result<&ClassRef, ConsistencyError> {
        let node_id = match endpoint {
            Endpoint::Start => shape.start,
            Endpoint::End => shape.end,
        };
        self.class_refs
            .get(&node_id)
            .ok_or_else(|| ConsistencyError::UnknownEndpoint {
                relationship_type: shape.rel_type.clone(),
                endpoint,
                node_id,
            })
    }
}

fn mint_uuid() -> String {
    Uuid::new_v4().to_string()
}
