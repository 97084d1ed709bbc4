//! Schema sources: where introspection records come from.
//!
//! This module provides the collaborator side of a conversion:
//! - The [`SchemaSource`] trait the conversion pipeline queries
//! - A PostgreSQL + Apache AGE backend that introspects a live graph
//! - A JSON dump backend that replays previously captured Neo4j procedure results
//! - Runtime backend selection through [`DatabaseConfig`]
//!
//! # Type Decisions
//!
//! **Why `i64` for node identities?**
//! Both Neo4j (virtual schema nodes) and AGE (label ids) report integer
//! identities. They are only compared for equality, never interpreted.
//!
//! **Why does the source drop property rows without a property name?**
//! `db.schema.nodeTypeProperties()` emits one row per label that has no
//! properties at all. Such rows describe a label, not a property, and the
//! label is already known from the visualization query.

mod config;
mod dump;
mod postgres;
mod records;
mod source;

pub use config::DatabaseConfig;
pub use dump::{DumpSource, NodeTypePropertyRow, SchemaDump};
pub use postgres::{PostgresAgeSource, PostgresConfig, DEFAULT_GRAPH_NAME};
pub use records::{NodeShape, PropertyTypeRecord, RelationshipShape, SchemaVisualization};
pub use source::SchemaSource;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to '{target}': {message}")]
    ConnectionFailed { target: String, message: String },

    #[error("Apache AGE extension is not installed or not loaded. \
             Please run: CREATE EXTENSION IF NOT EXISTS age; LOAD 'age';")]
    AgeUnavailable,

    #[error("Graph '{graph}' does not exist")]
    GraphNotFound { graph: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    #[error("Unexpected value in column '{column}': {message}")]
    InvalidValue { column: String, message: String },

    #[error("Failed to read schema dump '{path}': {message}")]
    DumpReadFailed { path: String, message: String },

    #[error("Failed to parse schema dump: {message}")]
    DumpParseFailed { message: String },

    #[error("Invalid database configuration: {message}")]
    InvalidConfig { message: String },
}
