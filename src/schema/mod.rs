//! Schema conversion: introspection records in, schema import document out.
//!
//! A conversion runs three stages in a fixed order:
//!
//! 1. [`ClassRelationshipExtractor`] turns the visualization result into classes
//!    and relationships, minting a uuid per class.
//! 2. [`AttributeCollector`] attaches property-type records to those classes.
//! 3. [`SchemaAssembler`] flattens both maps into a [`SchemaDocument`].
//!
//! The property query is only issued once extraction has succeeded, and any
//! [`ConsistencyError`] aborts the run before a document exists.

mod assembler;
mod attributes;
mod diagnostics;
mod extractor;
mod model;
mod types;

pub use assembler::SchemaAssembler;
pub use attributes::AttributeCollector;
pub use diagnostics::{ConsistencyError, Endpoint, SchemaWarning};
pub use extractor::{ClassMap, ClassRelationshipExtractor, Extraction, RelationshipMap};
pub use model::{
    Attribute, CanvasPosition, Class, Relationship, SchemaDocument, DEFAULT_COLOR, DEFAULT_ICON,
};
pub use types::{map_source_type, SourceType, TargetType};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::db::{DbError, SchemaSource};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Source(#[from] DbError),

    #[error("inconsistent schema report: {0}")]
    Consistency(#[from] ConsistencyError),
}

/// A finished conversion: the document plus every warning raised building it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Conversion {
    #[serde(flatten)]
    pub document: SchemaDocument,
    pub warnings: Vec<SchemaWarning>,
}

/// Introspect `source` and build the schema document.
pub fn convert(source: &mut dyn SchemaSource) -> Result<Conversion, ConvertError> {
    let visualization = source.visualize_schema()?;
    let Extraction {
        mut classes,
        relationships,
    } = ClassRelationshipExtractor::new().extract(&visualization)?;
    info!(
        "got {} classes and {} relationships",
        classes.len(),
        relationships.len()
    );

    let records = source.node_type_properties()?;
    let warnings = AttributeCollector::new().collect(&records, &mut classes)?;

    let document = SchemaAssembler::assemble(classes, relationships);
    info!(
        attributes = document.attribute_count(),
        warnings = warnings.len(),
        "schema assembled"
    );

    Ok(Conversion { document, warnings })
}
