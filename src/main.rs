use clap::Parser;

use schema_export::cli::Args;
use schema_export::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.log_level());
    let output = args.command.run(&args.source, args.format)?;
    println!("{}", output);
    Ok(())
}
