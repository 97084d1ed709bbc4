//! Integration tests reading a live PostgreSQL AGE graph.
//!
//! These tests require a PostgreSQL instance with AGE extension.
//! Run with: cargo test --features postgres-tests
//!
//! Prerequisites:
//! 1. PostgreSQL with AGE extension installed
//! 2. Create test database: `createdb -U postgres schema_export_test`

#![cfg(feature = "postgres-tests")]

use std::error::Error;

use apache_age::sync::{AgeClient, Client};
use apache_age::NoTls;
use serial_test::serial;

use schema_export::db::{DatabaseConfig, DbError, PostgresAgeSource, PostgresConfig, SchemaSource};
use schema_export::schema::{convert, TargetType};

/// Test connection string for PostgreSQL (local instance)
const PG_CONNECTION: &str = "host=localhost user=postgres dbname=schema_export_test";
const GRAPH_NAME: &str = "schema_export_graph";

/// Creates a fresh graph on construction and drops it on drop.
struct TestGraph {
    client: Client,
}

impl TestGraph {
    fn new(cypher: &[&str]) -> Result<Self, Box<dyn Error>> {
        let mut client = Client::connect_age(PG_CONNECTION, NoTls)?;
        drop_graph(&mut client);
        client.create_graph(GRAPH_NAME)?;

        for statement in cypher {
            client.simple_query(&format!(
                "SELECT * FROM cypher('{}', $$ {} $$) AS (v agtype)",
                GRAPH_NAME, statement
            ))?;
        }

        Ok(Self { client })
    }

    fn config() -> PostgresConfig {
        PostgresConfig {
            graph_name: GRAPH_NAME.to_string(),
            ..PostgresConfig::from_connection_string(PG_CONNECTION)
        }
    }
}

impl Drop for TestGraph {
    fn drop(&mut self) {
        drop_graph(&mut self.client);
    }
}

fn drop_graph(client: &mut Client) {
    let _ = client.simple_query(&format!(
        "SELECT * FROM ag_catalog.drop_graph('{}', true)",
        GRAPH_NAME
    ));
}

#[test]
#[serial]
fn test_visualization_from_age_catalog() {
    let _graph = TestGraph::new(&[
        "CREATE (:Person {name: 'Ada'})-[:WORKS_AT]->(:Company {name: 'Analytical'})",
        "MATCH (p:Person) CREATE (p)-[:KNOWS]->(p)",
    ])
    .expect("Failed to set up graph");

    let mut source = PostgresAgeSource::connect(&TestGraph::config()).unwrap();
    let visualization = source.visualize_schema().unwrap();

    let mut names: Vec<_> = visualization.nodes.iter().map(|n| n.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Company", "Person"]);

    let mut types: Vec<_> = visualization
        .relationships
        .iter()
        .map(|r| r.rel_type.as_str())
        .collect();
    types.sort();
    assert_eq!(types, vec!["KNOWS", "WORKS_AT"]);
}

#[test]
#[serial]
fn test_property_types_from_stored_values() {
    let _graph = TestGraph::new(&[
        "CREATE (:Person {name: 'Ada', age: 36, height: 1.65, active: true})",
        "CREATE (:Person {name: 'Grace', age: '85'})",
    ])
    .expect("Failed to set up graph");

    let mut source = PostgresAgeSource::connect(&TestGraph::config()).unwrap();
    let records = source.node_type_properties().unwrap();

    let age = records
        .iter()
        .find(|r| r.property_name == "age")
        .expect("age property");
    assert_eq!(age.owner_labels, vec!["Person".to_string()]);
    assert_eq!(age.observed_types.len(), 2);
    assert!(age.observed_types.contains(&"Long".to_string()));
    assert!(age.observed_types.contains(&"String".to_string()));
}

#[test]
#[serial]
fn test_convert_live_graph() {
    let _graph = TestGraph::new(&[
        "CREATE (:Person {name: 'Ada', age: 36})-[:WORKS_AT]->(:Company {name: 'Analytical'})",
    ])
    .expect("Failed to set up graph");

    let mut source = DatabaseConfig::Postgres(TestGraph::config()).connect().unwrap();
    let conversion = convert(source.as_mut()).unwrap();

    let person = conversion.document.class("Person").unwrap();
    let age = person.attributes.iter().find(|a| a.label == "age").unwrap();
    assert_eq!(age.data_type, TargetType::Number);

    let works_at = conversion.document.relationship("WORKS_AT").unwrap();
    assert_eq!(works_at.start, person.uuid);
    assert_eq!(works_at.end_label, "Company");
}

#[test]
#[serial]
fn test_missing_graph_is_reported() {
    let config = PostgresConfig {
        graph_name: "schema_export_no_such_graph".to_string(),
        ..PostgresConfig::from_connection_string(PG_CONNECTION)
    };

    let result = PostgresAgeSource::connect(&config);
    assert!(matches!(result, Err(DbError::GraphNotFound { .. })));
}
