//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::{ArgAction, Parser};
use tracing_subscriber::filter::LevelFilter;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for command results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, default_value_t = false, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the schema is read from.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Schema source: a postgres:// URL or the path to a schema dump JSON file
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// AGE graph to introspect (PostgreSQL sources only)
    #[arg(long, global = true)]
    pub graph: Option<String>,
}

impl Args {
    /// Log level selected by `-v`/`-q`.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
