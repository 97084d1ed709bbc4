//! The introspection interface the conversion pipeline depends on.

use super::records::{PropertyTypeRecord, SchemaVisualization};
use super::DbError;

/// A graph database (or a capture of one) that can report its schema.
///
/// Both calls are single blocking round-trips returning fully materialized
/// results. They are issued in declaration order, at most once per conversion.
pub trait SchemaSource {
    /// Distinct node labels and relationship types with their endpoints.
    fn visualize_schema(&mut self) -> Result<SchemaVisualization, DbError>;

    /// Every property observed per label, with all the types seen for it.
    fn node_type_properties(&mut self) -> Result<Vec<PropertyTypeRecord>, DbError>;

    /// Human-readable description of where the schema comes from, for logging.
    fn describe(&self) -> String;
}
