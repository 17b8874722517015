use serde::Deserialize;
use std::path::PathBuf;

use crate::report::Limits;
use crate::types::YearRange;

/// Settings as supplied by one source (CLI flags or `tubetally.toml`).
///
/// Every field is optional so sources can be layered; see [`Settings::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub outdir: Option<PathBuf>,
    #[serde(default)]
    pub start: Option<i32>,
    #[serde(default)]
    pub end: Option<i32>,
    #[serde(default)]
    pub top: Option<i64>,
    #[serde(default)]
    pub full_limit: Option<i64>,
    #[serde(default)]
    pub alltime_top: Option<i64>,
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub range: YearRange,
    pub limits: Limits,
}

pub(super) fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}
