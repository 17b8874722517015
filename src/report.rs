// src/report.rs
//! Output payloads assembled from a finished [`Tally`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{Tally, YearBucket};
use crate::error::Result;
use crate::rank::{rank, top_n, SORT_ORDER};
use crate::types::{ChannelStat, Limit};
use crate::writer::write_json;

/// Label recorded for the only action that is counted.
pub const FILTERED_ACTION: &str = "Watched";

pub const ALL_TIME_NOTES: &str = "Counts are derived from entries whose title starts with 'Watched ' and whose time parses as RFC3339; however, entries with missing channel info are grouped under '(unknown channel)'.";

pub const TOP_BY_YEAR_FILE: &str = "top_channels_by_year.json";
pub const SUMMARY_FILE: &str = "summary.json";
pub const ALL_TIME_FILE: &str = "top_channels_all_time.json";

#[must_use]
pub fn year_top_file(year: i32) -> String {
    format!("top_channels_{year}.json")
}

#[must_use]
pub fn year_full_file(year: i32) -> String {
    format!("channels_full_{year}.json")
}

/// Size limits applied to the ranked lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub top_n: Limit,
    pub full_limit: Limit,
    pub all_time_top: Limit,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            top_n: Limit(6),
            full_limit: Limit::UNLIMITED,
            all_time_top: Limit(100),
        }
    }
}

/// Top channels for one year (`top_channels_<YEAR>.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearResult {
    pub year: i32,
    pub total_videos_watched: u64,
    pub unique_channels: usize,
    pub top_channels: Vec<ChannelStat>,
    pub top_n: Limit,
    pub filtered_action: &'static str,
    pub time_parse_failures: u64,
}

/// Every channel for one year (`channels_full_<YEAR>.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullYearReport {
    pub year: i32,
    pub total_videos_watched: u64,
    pub channels_sorted: Vec<ChannelStat>,
    pub limit: Limit,
    pub sort: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopByYearReport {
    pub start_year: i32,
    pub end_year: i32,
    pub top_n: Limit,
    pub years: BTreeMap<i32, YearResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSpan {
    pub start: i32,
    pub end: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub year_range: YearSpan,
    pub total_videos_all_years: u64,
    pub years: BTreeMap<i32, YearResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllTimeReport {
    pub top_n: Limit,
    pub total_videos_counted: u64,
    pub channels: Vec<ChannelStat>,
    pub sort: &'static str,
    pub notes: &'static str,
}

/// Both per-year artifacts for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearReports {
    pub top: YearResult,
    pub full: FullYearReport,
}

/// Every payload of a run, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSet {
    pub per_year: Vec<YearReports>,
    pub by_year: TopByYearReport,
    pub summary: SummaryReport,
    pub all_time: AllTimeReport,
}

impl ReportSet {
    /// Ranks and reshapes the tally into the output payloads.
    #[must_use]
    pub fn build(tally: &Tally, limits: &Limits) -> Self {
        let per_year: Vec<YearReports> = tally
            .years()
            .map(|(year, bucket)| year_reports(year, bucket, limits))
            .collect();

        let years: BTreeMap<i32, YearResult> = per_year
            .iter()
            .map(|r| (r.top.year, r.top.clone()))
            .collect();

        let range = tally.range();
        let all_ranked = rank(tally.all_time());

        Self {
            by_year: TopByYearReport {
                start_year: range.start,
                end_year: range.end,
                top_n: limits.top_n,
                years: years.clone(),
            },
            summary: SummaryReport {
                year_range: YearSpan {
                    start: range.start,
                    end: range.end,
                },
                total_videos_all_years: tally.grand_total(),
                years,
            },
            all_time: AllTimeReport {
                top_n: limits.all_time_top,
                total_videos_counted: tally.grand_total(),
                channels: top_n(&all_ranked, limits.all_time_top),
                sort: SORT_ORDER,
                notes: ALL_TIME_NOTES,
            },
            per_year,
        }
    }

    /// Writes every artifact into `out_dir`; returns the paths written, in order.
    ///
    /// # Errors
    /// Returns the first write failure. Files written before it are kept.
    pub fn write_all(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.per_year.len() * 2 + 3);

        for reports in &self.per_year {
            let year = reports.top.year;
            written.push(emit(out_dir, &year_top_file(year), &reports.top)?);
            written.push(emit(out_dir, &year_full_file(year), &reports.full)?);
        }
        written.push(emit(out_dir, TOP_BY_YEAR_FILE, &self.by_year)?);
        written.push(emit(out_dir, SUMMARY_FILE, &self.summary)?);
        written.push(emit(out_dir, ALL_TIME_FILE, &self.all_time)?);

        Ok(written)
    }
}

fn year_reports(year: i32, bucket: &YearBucket, limits: &Limits) -> YearReports {
    let ranked = rank(&bucket.counts);
    YearReports {
        top: YearResult {
            year,
            total_videos_watched: bucket.total,
            unique_channels: bucket.unique_channels(),
            top_channels: top_n(&ranked, limits.top_n),
            top_n: limits.top_n,
            filtered_action: FILTERED_ACTION,
            time_parse_failures: bucket.time_parse_failures,
        },
        full: FullYearReport {
            year,
            total_videos_watched: bucket.total,
            channels_sorted: top_n(&ranked, limits.full_limit),
            limit: limits.full_limit,
            sort: SORT_ORDER,
        },
    }
}

fn emit<T: Serialize>(out_dir: &Path, name: &str, payload: &T) -> Result<PathBuf> {
    let path = out_dir.join(name);
    write_json(&path, payload)?;
    debug!(path = %path.display(), "wrote artifact");
    Ok(path)
}
