//! Command-line interface implementation for create-module.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for create-module.
#[derive(Parser, Debug)]
#[command(author, version, about = "create-module: interactive scaffolding tool for node library modules", long_about = None)]
pub struct Args {
    /// Directory to create the module in.
    /// Defaults to the current working directory, or ./m with --debug.
    #[arg(long, value_name = "MODULE_DIR")]
    pub module_dir: Option<PathBuf>,

    /// Skip the interactive prompts and generate from a canned answer set.
    /// The module directory is forcibly cleared first.
    #[arg(long)]
    pub debug: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
