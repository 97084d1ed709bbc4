mod execute;
mod output;

use std::error::Error;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::SchemaSource;
use crate::output::{OutputFormat, Outputable};

/// Introspect the graph and print the schema without writing a file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_export inspect --db ./schema-dump.json
  schema_export inspect --db postgres://me@localhost/graphs --graph social
  schema_export inspect --format json              # Full document plus warnings")]
pub struct InspectCmd {}

impl CommandRunner for InspectCmd {
    fn run(self, source: &mut dyn SchemaSource, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(source)?;
        Ok(result.format(format))
    }
}
