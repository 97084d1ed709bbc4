//! Source → target property type mapping.
//!
//! The graph database reports property types by name (`Long`, `StringArray`, ...).
//! The downstream schema format only understands a closed set of types, so every
//! source name resolves through [`SourceType`] to a [`TargetType`], with anything
//! unknown landing on [`TargetType::FALLBACK`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Data types accepted by the target schema format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetType {
    String,
    Number,
    Double,
    Date,
    Boolean,
}

impl TargetType {
    /// Every member of the target enumeration.
    pub const ALL: [TargetType; 5] = [
        TargetType::String,
        TargetType::Number,
        TargetType::Double,
        TargetType::Date,
        TargetType::Boolean,
    ];

    /// Type used when a source type has no entry in the mapping table.
    pub const FALLBACK: TargetType = TargetType::String;

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::String => "STRING",
            TargetType::Number => "NUMBER",
            TargetType::Double => "DOUBLE",
            TargetType::Date => "DATE",
            TargetType::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property types the mapping table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    String,
    Long,
    Double,
    StringArray,
    Date,
    Point,
    Boolean,
}

impl SourceType {
    pub const ALL: [SourceType; 7] = [
        SourceType::String,
        SourceType::Long,
        SourceType::Double,
        SourceType::StringArray,
        SourceType::Date,
        SourceType::Point,
        SourceType::Boolean,
    ];

    /// Look up a source type by the exact name the database reports.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceType::String => "String",
            SourceType::Long => "Long",
            SourceType::Double => "Double",
            SourceType::StringArray => "StringArray",
            SourceType::Date => "Date",
            SourceType::Point => "Point",
            SourceType::Boolean => "Boolean",
        }
    }

    pub fn target_type(&self) -> TargetType {
        match self {
            SourceType::String => TargetType::String,
            SourceType::Long => TargetType::Number,
            SourceType::Double => TargetType::Double,
            SourceType::StringArray => TargetType::String,
            SourceType::Date => TargetType::Date,
            SourceType::Point => TargetType::String,
            SourceType::Boolean => TargetType::Boolean,
        }
    }
}

/// Map a reported source type name to its target type.
///
/// Returns `None` for names outside the table; callers decide how to report
/// the fallback.
pub fn map_source_type(name: &str) -> Option<TargetType> {
    SourceType::parse(name).map(|t| t.target_type())
}
