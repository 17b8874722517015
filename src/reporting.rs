//! Console output for finished runs.
//!
//! The success line is the only thing printed to stdout by default; the verbose
//! table shows each year's totals and leading channel, followed by what the pass
//! skipped.

use colored::Colorize;
use std::fmt::Write;

use crate::aggregate::RunStats;
use crate::pipeline::RunOutcome;
use crate::report::YearResult;

/// Prints the completion line, and the per-year table when `verbose`.
pub fn print_outcome(outcome: &RunOutcome, verbose: bool) {
    if verbose {
        print!("{}", render_table(outcome));
    }
    println!(
        "{} {}",
        "Wrote JSON outputs to:".green().bold(),
        outcome.out_dir.display()
    );
}

/// Prints a failure to stderr.
pub fn print_error(err: &dyn std::error::Error) {
    eprintln!("{} {err}", "error:".red().bold());
}

#[must_use]
pub fn render_table(outcome: &RunOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("{:<6} {:>8} {:>9}  {}", "year", "videos", "channels", "top channel").bold()
    );
    for result in outcome.reports.summary.years.values() {
        let _ = writeln!(out, "{}", year_row(result));
    }
    let _ = writeln!(
        out,
        "{:<6} {:>8}",
        "all".bold(),
        outcome.reports.summary.total_videos_all_years
    );
    out.push_str(&stats_line(&outcome.stats));
    out.push('\n');
    out
}

fn year_row(result: &YearResult) -> String {
    let leader = result.top_channels.first().map_or_else(
        || "-".dimmed().to_string(),
        |s| format!("{} ({})", s.channel_name.cyan(), s.watch_count),
    );
    format!(
        "{:<6} {:>8} {:>9}  {leader}",
        result.year, result.total_videos_watched, result.unique_channels
    )
}

fn stats_line(stats: &RunStats) -> String {
    let line = format!(
        "{} records: {} counted, {} not watch events, {} out of range, {} bad timestamps",
        stats.records, stats.watched, stats.not_watched, stats.out_of_range, stats.bad_timestamps
    );
    if stats.bad_timestamps > 0 {
        line.yellow().to_string()
    } else {
        line.dimmed().to_string()
    }
}
