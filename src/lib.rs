//! schema_export library - graph schema to schema-import document converter
//!
//! Reads the structural schema of a property graph (node labels, relationship
//! types, property types) and assembles the class/relationship/attribute
//! document consumed by the schema import tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod logging;
pub mod output;
pub mod schema;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
