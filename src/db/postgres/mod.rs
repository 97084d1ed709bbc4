//! PostgreSQL with Apache AGE schema source.
//!
//! AGE has no schema procedures, so the Neo4j-style records are rebuilt from
//! the AGE catalog and from Cypher scans of the graph:
//! - node shapes come from the vertex labels in `ag_catalog.ag_label`
//! - relationship shapes from the distinct (start label, type, end label) triples
//! - property types from the values actually stored on each vertex

mod config;
mod conversion;

pub use config::{PostgresConfig, DEFAULT_GRAPH_NAME};

use std::collections::HashMap;

use apache_age::sync::{AgeClient, Client};
use apache_age::NoTls;
use indexmap::IndexMap;
use postgres::SimpleQueryMessage;
use serde_json::Value;
use tracing::{debug, info};

use super::records::{NodeShape, PropertyTypeRecord, RelationshipShape, SchemaVisualization};
use super::source::SchemaSource;
use super::DbError;
use conversion::{expect_string, parse_agtype, property_type_name, quote_literal};

/// Label AGE assigns to vertices created without one.
const DEFAULT_VERTEX_LABEL: &str = "_ag_label_vertex";

/// Schema source reading a graph stored in PostgreSQL through Apache AGE.
///
/// Uses the `apache-age` crate's synchronous client; every query is a single
/// blocking round-trip.
pub struct PostgresAgeSource {
    client: Client,
    graph_name: String,
    target: String,
}

impl PostgresAgeSource {
    /// Connect and check that AGE is loaded and the graph exists.
    pub fn connect(config: &PostgresConfig) -> Result<Self, DbError> {
        let connection_string = config.build_connection_string()?;
        let target = format!("{} (graph '{}')", config.display_target(), config.graph_name);
        info!("connecting to {}", target);

        let mut client = Client::connect_age(&connection_string, NoTls).map_err(|e| {
            DbError::ConnectionFailed {
                target: config.display_target(),
                message: e.to_string(),
            }
        })?;

        Self::verify_age_extension(&mut client)?;
        if !Self::graph_exists(&mut client, &config.graph_name)? {
            return Err(DbError::GraphNotFound {
                graph: config.graph_name.clone(),
            });
        }

        Ok(Self {
            client,
            graph_name: config.graph_name.clone(),
            target,
        })
    }

    /// Verify that the AGE extension is installed and loaded.
    fn verify_age_extension(client: &mut Client) -> Result<(), DbError> {
        match client.simple_query("SELECT * FROM ag_catalog.ag_graph LIMIT 1") {
            Ok(_) => Ok(()),
            Err(e) => {
                let err_str = e.to_string();
                if err_str.contains("ag_catalog") || err_str.contains("does not exist") {
                    Err(DbError::AgeUnavailable)
                } else {
                    Err(DbError::QueryFailed {
                        message: format!("Failed to verify AGE extension: {}", e),
                    })
                }
            }
        }
    }

    /// Check if a graph with the given name exists.
    fn graph_exists(client: &mut Client, graph_name: &str) -> Result<bool, DbError> {
        let query = format!(
            "SELECT 1 FROM ag_catalog.ag_graph WHERE name = {}",
            quote_literal(graph_name)
        );
        let rows = simple_rows(client, &query)?;
        Ok(!rows.is_empty())
    }

    /// Vertex labels of the graph, as (label id, label name).
    fn vertex_labels(&mut self) -> Result<Vec<NodeShape>, DbError> {
        let query = format!(
            "SELECT l.id, l.name FROM ag_catalog.ag_label l \
             JOIN ag_catalog.ag_graph g ON l.graph = g.graphid \
             WHERE g.name = {} AND l.kind = 'v' AND l.name <> {} \
             ORDER BY l.id",
            quote_literal(&self.graph_name),
            quote_literal(DEFAULT_VERTEX_LABEL)
        );

        simple_rows(&mut self.client, &query)?
            .into_iter()
            .map(|row| {
                let id = row[0].parse::<i64>().map_err(|e| DbError::InvalidValue {
                    column: "id".to_string(),
                    message: e.to_string(),
                })?;
                Ok(NodeShape {
                    id,
                    name: row[1].clone(),
                })
            })
            .collect()
    }

    /// Run a Cypher query and parse every returned agtype column.
    fn cypher_rows(&mut self, cypher: &str, columns: &[&str]) -> Result<Vec<Vec<Value>>, DbError> {
        let column_defs = columns
            .iter()
            .map(|c| format!("{} agtype", c))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "SELECT * FROM cypher({}, $$ {} $$) AS ({})",
            quote_literal(&self.graph_name),
            cypher,
            column_defs
        );

        simple_rows(&mut self.client, &query)?
            .into_iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(row)
                    .map(|(column, text)| parse_agtype(column, &text))
                    .collect()
            })
            .collect()
    }
}

impl SchemaSource for PostgresAgeSource {
    fn visualize_schema(&mut self) -> Result<SchemaVisualization, DbError> {
        let nodes = self.vertex_labels()?;
        let label_ids: HashMap<&str, i64> =
            nodes.iter().map(|n| (n.name.as_str(), n.id)).collect();

        let triples = self.cypher_rows(
            "MATCH (a)-[r]->(b) WHERE label(a) <> '' AND label(b) <> '' \
             RETURN DISTINCT label(a), label(r), label(b)",
            &["start_label", "rel_type", "end_label"],
        )?;

        let mut relationships = Vec::with_capacity(triples.len());
        for row in triples {
            let [start, rel_type, end]: [Value; 3] =
                row.try_into().map_err(|_| DbError::InvalidValue {
                    column: "start_label".to_string(),
                    message: "expected three columns".to_string(),
                })?;
            let start = expect_string("start_label", start)?;
            let rel_type = expect_string("rel_type", rel_type)?;
            let end = expect_string("end_label", end)?;

            let lookup = |label: &str, column: &str| {
                label_ids.get(label).copied().ok_or_else(|| DbError::InvalidValue {
                    column: column.to_string(),
                    message: format!("label '{}' is not in the AGE catalog", label),
                })
            };
            relationships.push(RelationshipShape {
                start: lookup(&start, "start_label")?,
                end: lookup(&end, "end_label")?,
                rel_type,
            });
        }

        debug!(
            nodes = nodes.len(),
            relationships = relationships.len(),
            "read AGE schema visualization"
        );
        Ok(SchemaVisualization {
            nodes,
            relationships,
        })
    }

    fn node_type_properties(&mut self) -> Result<Vec<PropertyTypeRecord>, DbError> {
        let rows = self.cypher_rows(
            "MATCH (n) WHERE label(n) <> '' RETURN label(n), properties(n)",
            &["label", "props"],
        )?;

        // (label, property) -> observed type names, in first-seen order
        let mut observed: IndexMap<(String, String), Vec<&'static str>> = IndexMap::new();
        for row in rows {
            let mut row = row.into_iter();
            let label = expect_string("label", row.next().unwrap_or(Value::Null))?;
            let Some(Value::Object(properties)) = row.next() else {
                continue;
            };
            for (name, value) in &properties {
                let type_name = property_type_name(value);
                let types = observed.entry((label.clone(), name.clone())).or_default();
                if !types.contains(&type_name) {
                    types.push(type_name);
                }
            }
        }

        Ok(observed
            .into_iter()
            .map(|((label, name), types)| PropertyTypeRecord::new([label], name, types))
            .collect())
    }

    fn describe(&self) -> String {
        format!("PostgreSQL AGE {}", self.target)
    }
}

/// Run a simple query and return the text of every column of every row.
fn simple_rows(client: &mut Client, query: &str) -> Result<Vec<Vec<String>>, DbError> {
    let messages = client.simple_query(query).map_err(|e| DbError::QueryFailed {
        message: e.to_string(),
    })?;

    let mut rows = Vec::new();
    for message in messages {
        if let SimpleQueryMessage::Row(row) = message {
            let values = (0..row.len())
                .map(|i| row.get(i).unwrap_or("null").to_string())
                .collect();
            rows.push(values);
        }
    }
    Ok(rows)
}
