pub mod sample;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "office-directory")]
#[command(about = "Browse the firm's offices and their open/closed status")]
pub struct CliConfig {
    /// TOML catalog file; the bundled nine offices are used when omitted
    #[arg(short, long)]
    pub catalog: Option<String>,

    /// Display language (es or en); defaults to the catalog's site language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Office id to select instead of the first one
    #[arg(short, long)]
    pub select: Option<String>,

    /// Print the active office as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the status badge for this local hour (0-23) instead of the current time
    #[arg(long)]
    pub hour: Option<u32>,

    /// Keep refreshing the status badge every minute
    #[arg(long)]
    pub watch: bool,

    /// Stop watching after this many refreshes
    #[arg(long)]
    pub ticks: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
