use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tubetally",
    version,
    about = "Per-year channel statistics from a watch-history export"
)]
pub struct Cli {
    /// Path to watch-history.json (required here or in the config file)
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Output directory to write JSON files into [default: out]
    #[arg(long, value_name = "DIR")]
    pub outdir: Option<PathBuf>,
    /// Start year, inclusive [default: 2020]
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<i32>,
    /// End year, inclusive [default: 2026]
    #[arg(long, allow_hyphen_values = true)]
    pub end: Option<i32>,
    /// Top N channels per year, 0 = all [default: 6]
    #[arg(long, allow_hyphen_values = true)]
    pub top: Option<i64>,
    /// Limit for channels_full_<YEAR>.json, 0 = all [default: 0]
    #[arg(long, allow_hyphen_values = true)]
    pub full_limit: Option<i64>,
    /// Top N channels for the all-time output, 0 = all [default: 100]
    #[arg(long, allow_hyphen_values = true)]
    pub alltime_top: Option<i64>,
    /// Settings file (TOML); `tubetally.toml` is used when present
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print a per-year table and debug logs
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// The flags given on the command line, as a settings layer.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            input: self.input.clone(),
            outdir: self.outdir.clone(),
            start: self.start,
            end: self.end,
            top: self.top,
            full_limit: self.full_limit,
            alltime_top: self.alltime_top,
        }
    }
}
