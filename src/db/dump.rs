//! Schema source backed by a JSON capture of the Neo4j schema procedures.
//!
//! The dump holds the results of `CALL db.schema.visualization()` and
//! `CALL db.schema.nodeTypeProperties()`:
//!
//! ```json
//! {
//!   "visualization": {
//!     "nodes": [{"id": -1, "name": "Person"}],
//!     "relationships": [{"start": -1, "end": -1, "type": "KNOWS"}]
//!   },
//!   "nodeTypeProperties": [
//!     {"nodeType": ":`Person`", "nodeLabels": ["Person"], "propertyName": "age",
//!      "propertyTypes": ["Long"], "mandatory": true}
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::records::{PropertyTypeRecord, SchemaVisualization};
use super::source::SchemaSource;
use super::DbError;

/// Top-level structure of a schema dump file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDump {
    #[serde(default)]
    pub visualization: SchemaVisualization,
    #[serde(default)]
    pub node_type_properties: Vec<NodeTypePropertyRow>,
}

/// One row of `db.schema.nodeTypeProperties()` as Neo4j reports it.
///
/// `propertyName` and `propertyTypes` are null for labels without properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTypePropertyRow {
    #[serde(default)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub node_labels: Vec<String>,
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub property_types: Option<Vec<String>>,
}

impl NodeTypePropertyRow {
    /// Convert into a property record, or `None` for a row describing a bare label.
    pub fn into_record(self) -> Option<PropertyTypeRecord> {
        let property_name = self.property_name?;
        Some(PropertyTypeRecord {
            owner_labels: self.node_labels,
            property_name,
            observed_types: self.property_types.unwrap_or_default(),
        })
    }
}

/// Replays a captured schema.
#[derive(Debug, Clone)]
pub struct DumpSource {
    origin: String,
    dump: SchemaDump,
}

impl DumpSource {
    /// Load a dump from a JSON file.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let content = fs::read_to_string(path).map_err(|e| DbError::DumpReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let dump = Self::parse(&content)?;
        info!("loaded schema dump from {}", path.display());

        Ok(Self {
            origin: path.display().to_string(),
            dump,
        })
    }

    /// Load a dump from an in-memory JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, DbError> {
        Ok(Self {
            origin: "<memory>".to_string(),
            dump: Self::parse(content)?,
        })
    }

    fn parse(content: &str) -> Result<SchemaDump, DbError> {
        serde_json::from_str(content).map_err(|e| DbError::DumpParseFailed {
            message: e.to_string(),
        })
    }
}

impl SchemaSource for DumpSource {
    fn visualize_schema(&mut self) -> Result<SchemaVisualization, DbError> {
        Ok(self.dump.visualization.clone())
    }

    fn node_type_properties(&mut self) -> Result<Vec<PropertyTypeRecord>, DbError> {
        let records = self
            .dump
            .node_type_properties
            .iter()
            .cloned()
            .filter_map(|row| {
                let node_type = row.node_type.clone();
                let record = row.into_record();
                if record.is_none() {
                    debug!(node_type = ?node_type, "label without properties");
                }
                record
            })
            .collect();
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("schema dump {}", self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::test_utils::create_temp_json_file;
    use rstest::rstest;

    #[rstest]
    fn test_parse_social_graph() {
        let mut source = DumpSource::from_json_str(fixtures::SOCIAL_GRAPH).unwrap();

        let visualization = source.visualize_schema().unwrap();
        assert_eq!(visualization.nodes.len(), 3);
        assert_eq!(visualization.relationships.len(), 3);
        assert_eq!(visualization.relationships[0].rel_type, "KNOWS");
    }

    #[rstest]
    fn test_rows_without_property_name_are_dropped() {
        let json = r#"{
            "visualization": {"nodes": [{"id": 1, "name": "Tag"}], "relationships": []},
            "nodeTypeProperties": [
                {"nodeType": ":`Tag`", "nodeLabels": ["Tag"], "propertyName": null,
                 "propertyTypes": null, "mandatory": false}
            ]
        }"#;
        let mut source = DumpSource::from_json_str(json).unwrap();

        assert!(source.node_type_properties().unwrap().is_empty());
    }

    #[rstest]
    fn test_row_fields_map_to_record() {
        let json = r#"{
            "nodeTypeProperties": [
                {"nodeType": ":`Person`", "nodeLabels": ["Person"], "propertyName": "age",
                 "propertyTypes": ["Long", "String"], "mandatory": true}
            ]
        }"#;
        let mut source = DumpSource::from_json_str(json).unwrap();

        let records = source.node_type_properties().unwrap();
        assert_eq!(
            records,
            vec![PropertyTypeRecord::new(["Person"], "age", ["Long", "String"])]
        );
    }

    #[rstest]
    fn test_missing_sections_default_to_empty() {
        let mut source = DumpSource::from_json_str("{}").unwrap();

        assert_eq!(source.visualize_schema().unwrap(), SchemaVisualization::default());
        assert!(source.node_type_properties().unwrap().is_empty());
    }

    #[rstest]
    fn test_invalid_json_is_rejected() {
        let result = DumpSource::from_json_str("{ not json }");
        assert!(matches!(result, Err(DbError::DumpParseFailed { .. })));
    }

    #[rstest]
    fn test_open_from_file() {
        let file = create_temp_json_file(fixtures::SOCIAL_GRAPH);

        let source = DumpSource::open(file.path()).unwrap();

        assert!(source.describe().contains(&file.path().display().to_string()));
    }

    #[rstest]
    fn test_open_missing_file() {
        let result = DumpSource::open(Path::new("/nonexistent/schema.json"));
        assert!(matches!(result, Err(DbError::DumpReadFailed { .. })));
    }
}
