// src/cli/mod.rs
//! Command-line entry: resolve settings, then run the pipeline once.

pub mod args;

pub use args::Cli;

use std::path::Path;

use crate::config::{RunConfig, Settings};
use crate::error::Result;
use crate::pipeline::{self, RunOutcome};

/// Resolves the effective configuration: flags over config file over defaults.
///
/// # Errors
/// Returns `TallyError::Config` for an unreadable config file or invalid settings.
pub fn resolve(cli: &Cli, cwd: &Path) -> Result<RunConfig> {
    let file = Settings::load(cli.config.as_deref(), cwd)?;
    file.merge(cli.settings()).resolve()
}

/// Resolves configuration and runs the pipeline.
///
/// # Errors
/// Returns configuration, I/O, or format errors.
pub fn execute(cli: &Cli, cwd: &Path) -> Result<RunOutcome> {
    let config = resolve(cli, cwd)?;
    pipeline::run(&config)
}
