use serde::Serialize;

use super::TypesCmd;
use crate::schema::{SourceType, TargetType};

/// One row of the mapping table
#[derive(Debug, Clone, Serialize)]
pub struct TypeMapping {
    pub source: &'static str,
    pub target: TargetType,
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeMappingResult {
    pub mappings: Vec<TypeMapping>,
    pub fallback: TargetType,
}

impl TypesCmd {
    /// The mapping table needs no schema source.
    pub fn run(self) -> TypeMappingResult {
        let mappings = SourceType::ALL
            .iter()
            .map(|t| TypeMapping {
                source: t.name(),
                target: t.target_type(),
            })
            .collect();

        TypeMappingResult {
            mappings,
            fallback: TargetType::FALLBACK,
        }
    }
}
