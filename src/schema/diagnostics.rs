//! Fatal and non-fatal conditions raised while converting introspection records.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Which end of a relationship record failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// The two introspection results disagree with each other. Aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("relationship '{relationship_type}' references unknown {endpoint} node {node_id}")]
    UnknownEndpoint {
        relationship_type: String,
        endpoint: Endpoint,
        node_id: i64,
    },

    #[error("property '{property}' references unknown label '{label}'")]
    UnknownLabel { label: String, property: String },
}

/// Conditions that are logged and worked around.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaWarning {
    #[error("property '{property}' is declared on {} labels {labels:?}, only single-label properties are supported; skipping", labels.len())]
    UnsupportedShape { property: String, labels: Vec<String> },

    #[error("unsupported type {} for {label}.{property}, falling back to STRING", source_type.as_deref().unwrap_or("<none>"))]
    UnrecognizedType {
        label: String,
        property: String,
        source_type: Option<String>,
    },

    #[error("multiple property types for {label}.{property}, using {chosen} and ignoring {discarded:?}")]
    AmbiguousType {
        label: String,
        property: String,
        chosen: String,
        discarded: Vec<String>,
    },
}
