mod execute;
mod output;

use clap::Args;

pub use execute::{TypeMapping, TypeMappingResult};

/// Show how source property types map to schema types
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_export types                 # Mapping table
  schema_export types --format json   # Machine-readable mapping")]
pub struct TypesCmd {}
