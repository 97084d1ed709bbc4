mod execute;
mod output;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::commands::{CommandRunner, Execute};
use crate::db::SchemaSource;
use crate::output::{OutputFormat, Outputable};

pub use execute::{render_document, ExportError, ExportResult};

/// Default file the schema document is written to.
pub const DEFAULT_OUTPUT: &str = "schema-generated.json";

/// Introspect the graph and write the schema import file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  schema_export export --db postgres://me@localhost/graphs
  schema_export export --db ./schema-dump.json -o social.json --pretty
  schema_export export --format json                 # Summary as JSON")]
pub struct ExportCmd {
    /// File to write the schema document to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Indent the written document
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

impl CommandRunner for ExportCmd {
    fn run(self, source: &mut dyn SchemaSource, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        let result = self.execute(source)?;
        Ok(result.format(format))
    }
}
