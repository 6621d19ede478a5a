use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// In-memory task board with a terminal UI.
/// Starts from the sample tasks unless --empty or `seed = false` is given.
#[derive(Parser)]
#[command(name = "taskflow", version, about = "Daily task management board")]
pub struct Cli {
    /// Path to the TOML config file (default: ~/.taskflow/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log output: off | stderr | <file>.
    #[arg(long, global = true, default_value = "off")]
    pub log: String,

    /// Log at DEBUG instead of INFO.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start with an empty board instead of the sample tasks.
    #[arg(long, global = true)]
    pub empty: bool,

    /// Defaults to `ui` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}
