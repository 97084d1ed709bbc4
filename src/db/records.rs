//! Typed introspection records returned by a [`SchemaSource`](super::SchemaSource).
//!
//! Field names match what Neo4j's `db.schema.visualization()` reports, so a dump of
//! that procedure deserializes straight into these types.

use serde::{Deserialize, Serialize};

/// One distinct node label, identified by a source-local id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeShape {
    pub id: i64,
    pub name: String,
}

/// One relationship type between two node shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipShape {
    pub start: i64,
    pub end: i64,
    #[serde(rename = "type")]
    pub rel_type: String,
}

/// Result of the schema visualization query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaVisualization {
    #[serde(default)]
    pub nodes: Vec<NodeShape>,
    #[serde(default)]
    pub relationships: Vec<RelationshipShape>,
}

/// One property observed on instances of one or more labels.
///
/// `observed_types` lists every type seen for the property, in the order the
/// source reported them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyTypeRecord {
    pub owner_labels: Vec<String>,
    pub property_name: String,
    pub observed_types: Vec<String>,
}

impl PropertyTypeRecord {
    pub fn new(
        owner_labels: impl IntoIterator<Item = impl Into<String>>,
        property_name: impl Into<String>,
        observed_types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            owner_labels: owner_labels.into_iter().map(Into::into).collect(),
            property_name: property_name.into(),
            observed_types: observed_types.into_iter().map(Into::into).collect(),
        }
    }
}
