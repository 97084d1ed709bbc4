//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` running it against a schema source
//! - `output.rs` formatting its result

pub mod export;
pub mod inspect;
pub mod types;

pub use export::ExportCmd;
pub use inspect::InspectCmd;
pub use types::TypesCmd;

use clap::Subcommand;
use std::error::Error;

use crate::cli::SourceArgs;
use crate::db::{DatabaseConfig, SchemaSource};
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands against a schema source.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, source: &mut dyn SchemaSource) -> Result<Self::Output, Box<dyn Error>>;
}

/// Trait for running a command and formatting its output.
pub trait CommandRunner {
    fn run(self, source: &mut dyn SchemaSource, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Introspect the graph and write the schema import file
    Export(ExportCmd),

    /// Introspect the graph and print the schema without writing a file
    Inspect(InspectCmd),

    /// Show how source property types map to schema types
    Types(TypesCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, source_args: &SourceArgs, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Export(cmd) => cmd.run(connect(source_args)?.as_mut(), format),
            Command::Inspect(cmd) => cmd.run(connect(source_args)?.as_mut(), format),
            Command::Types(cmd) => Ok(cmd.run().format(format)),
        }
    }
}

fn connect(source_args: &SourceArgs) -> Result<Box<dyn SchemaSource>, Box<dyn Error>> {
    let config = DatabaseConfig::resolve(source_args.db.as_deref(), source_args.graph.as_deref())?;
    let source = config.connect()?;
    tracing::info!("reading schema from {}", source.describe());
    Ok(source)
}
