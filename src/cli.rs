//! CLI Argument Parsing
//!
//! Global flags (--compact, --verbose) are inherited by all subcommands.

use clap::{Parser, Subcommand};

use crate::options::OptionsArgs;

/// ovfdeploy - resolve deployment options for template-based VMs
#[derive(Parser, Debug)]
#[command(name = "ovfdeploy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    /// Verbosity level (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the deployment options and print them as JSON
    Resolve {
        #[command(flatten)]
        options: OptionsArgs,
    },

    /// Print an empty options payload to fill in
    Spec,
}
