//! ovfdeploy CLI
//!
//! Usage: ovfdeploy <COMMAND>
//!
//! Commands:
//!   resolve  Resolve --options / --options.json and print the result
//!   spec     Print an empty options payload

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ovfdeploy::cli::{Cli, Commands};
use ovfdeploy::{Options, OptionsArgs, OptionsFlag};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve { options } => cmd_resolve(options, cli.compact),
        Commands::Spec => cmd_spec(cli.compact),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the JSON payload
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_resolve(args: OptionsArgs, compact: bool) -> Result<()> {
    let mut flag = OptionsFlag::from(args);
    flag.process().context("failed to resolve deployment options")?;

    let options = flag
        .into_options()
        .context("deployment options were not resolved")?;
    print_options(&options, compact)
}

fn cmd_spec(compact: bool) -> Result<()> {
    print_options(&Options::default(), compact)
}

fn print_options(options: &Options, compact: bool) -> Result<()> {
    let rendered = if compact {
        options.to_json()?
    } else {
        options.to_json_pretty()?
    };
    println!("{}", rendered);
    Ok(())
}
