// src/pipeline.rs
//! One complete run: stream the export, tally it, write the reports.

use std::io::BufRead;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::aggregate::{RunStats, Tally};
use crate::config::RunConfig;
use crate::error::Result;
use crate::report::ReportSet;
use crate::stream::ActivityStream;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub out_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub reports: ReportSet,
    pub stats: RunStats,
}

/// Runs the pipeline for `config`.
///
/// Nothing is written unless the whole input decodes.
///
/// # Errors
/// Returns error if the input cannot be opened or decoded, or an output
/// file cannot be written.
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    config.validate()?;
    info!(
        input = %config.input.display(),
        years = %config.range,
        "starting tally"
    );

    let stream = ActivityStream::open(&config.input)?;
    let tally = tally_stream(stream, config)?;
    let reports = ReportSet::build(&tally, &config.limits);
    let written = reports.write_all(&config.out_dir)?;

    info!(
        out_dir = %config.out_dir.display(),
        files = written.len(),
        "wrote reports"
    );

    Ok(RunOutcome {
        out_dir: config.out_dir.clone(),
        written,
        reports,
        stats: tally.stats(),
    })
}

/// Drives `stream` through a fresh [`Tally`] for `config`'s year range.
///
/// # Errors
/// Returns the first decode error; the partial tally is discarded.
pub fn tally_stream<R: BufRead>(stream: ActivityStream<R>, config: &RunConfig) -> Result<Tally> {
    let mut tally = Tally::new(config.range);
    tally.consume(stream)?;

    let stats = tally.stats();
    debug!(
        records = stats.records,
        watched = stats.watched,
        not_watched = stats.not_watched,
        out_of_range = stats.out_of_range,
        "input consumed"
    );
    if stats.bad_timestamps > 0 {
        warn!(
            count = stats.bad_timestamps,
            "watch events skipped: time is not RFC 3339"
        );
    }
    Ok(tally)
}
