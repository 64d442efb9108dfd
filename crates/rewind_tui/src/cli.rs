//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel.
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults apply if it does not exist.
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Log file, overriding the settings file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
