// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Extra common-password list, one per line, merged with the built-in one
    #[arg(long, value_name = "FILE", env = "DENYLIST_PATH")]
    pub deny_list: Option<PathBuf>,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
