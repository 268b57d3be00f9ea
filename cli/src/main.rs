mod args;
mod commands;

use args::Cli;
use clap::Parser;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    // Validate inputs
    cli.validate()?;

    common::init_logging(&cli.log_level, cli.log_format)?;

    let registry = common::load_registry(cli.config.as_deref())?;
    let network = registry.resolve(cli.network.as_deref())?;

    tracing::info!(network = network.name(), "{}", cli.command.description());

    for line in commands::run(&cli.command, &registry, network)? {
        println!("{}", line);
    }

    Ok(())
}
