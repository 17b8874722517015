// src/config/mod.rs
pub mod types;

pub use self::types::{RunConfig, Settings};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TallyError};
use crate::report::Limits;
use crate::types::{Limit, YearRange};

/// Project file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "tubetally.toml";

impl Settings {
    /// Layers `over` on top of `self`; fields set in `over` win.
    #[must_use]
    pub fn merge(self, over: Settings) -> Settings {
        Settings {
            input: over.input.or(self.input),
            outdir: over.outdir.or(self.outdir),
            start: over.start.or(self.start),
            end: over.end.or(self.end),
            top: over.top.or(self.top),
            full_limit: over.full_limit.or(self.full_limit),
            alltime_top: over.alltime_top.or(self.alltime_top),
        }
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    /// Returns `TallyError::Config` on invalid TOML or unknown keys.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TallyError::Config(format!("invalid TOML in {}: {e}", origin.display())))
    }

    /// Loads settings from `explicit`, or from `tubetally.toml` in `dir` if present.
    ///
    /// # Errors
    /// Returns `TallyError::Config` if an explicit file is missing or any file is invalid.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let local = dir.join(CONFIG_FILE);
                if !local.is_file() {
                    return Ok(Self::default());
                }
                local
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| {
            TallyError::Config(format!("cannot read config {}: {e}", path.display()))
        })?;
        Self::parse_toml(&content, &path)
    }

    /// Fills defaults and validates.
    ///
    /// # Errors
    /// Returns `TallyError::Config` if the input path is missing or `start > end`.
    pub fn resolve(self) -> Result<RunConfig> {
        let defaults = RunConfig::default();
        let input = self
            .input
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| TallyError::Config("an input file is required (--in)".into()))?;

        let config = RunConfig {
            input,
            out_dir: self
                .outdir
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(defaults.out_dir),
            range: YearRange::new(
                self.start.unwrap_or(defaults.range.start),
                self.end.unwrap_or(defaults.range.end),
            ),
            limits: Limits {
                top_n: self.top.map_or(defaults.limits.top_n, Limit),
                full_limit: self.full_limit.map_or(defaults.limits.full_limit, Limit),
                all_time_top: self.alltime_top.map_or(defaults.limits.all_time_top, Limit),
            },
        };
        config.validate()?;
        Ok(config)
    }
}

impl RunConfig {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `TallyError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(TallyError::Config("an input file is required (--in)".into()));
        }
        if self.range.start > self.range.end {
            return Err(TallyError::Config(format!(
                "start year {} must be <= end year {}",
                self.range.start, self.range.end
            )));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            out_dir: types::default_out_dir(),
            range: YearRange::default(),
            limits: Limits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn with_input() -> Settings {
        Settings {
            input: Some(PathBuf::from("watch-history.json")),
            ..Settings::default()
        }
    }

    #[test]
    fn test_defaults() -> Result<()> {
        let config = with_input().resolve()?;
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.range, YearRange::new(2020, 2026));
        assert_eq!(config.limits.top_n, Limit(6));
        assert_eq!(config.limits.full_limit, Limit(0));
        assert_eq!(config.limits.all_time_top, Limit(100));
        Ok(())
    }

    #[test]
    fn test_missing_input_is_config_error() {
        assert!(matches!(Settings::default().resolve(), Err(TallyError::Config(_))));
        let empty = Settings {
            input: Some(PathBuf::new()),
            ..Settings::default()
        };
        assert!(matches!(empty.resolve(), Err(TallyError::Config(_))));
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let settings = Settings {
            start: Some(2025),
            end: Some(2021),
            ..with_input()
        };
        assert!(matches!(settings.resolve(), Err(TallyError::Config(_))));
    }

    #[test]
    fn test_single_year_range_is_valid() -> Result<()> {
        let settings = Settings {
            start: Some(2023),
            end: Some(2023),
            ..with_input()
        };
        assert_eq!(settings.resolve()?.range, YearRange::new(2023, 2023));
        Ok(())
    }

    #[test]
    fn test_cli_overrides_file() -> Result<()> {
        let file = Settings::parse_toml(
            "input = \"a.json\"\noutdir = \"reports\"\ntop = 10\nstart = 2018\n",
            Path::new("tubetally.toml"),
        )?;
        let cli = Settings {
            top: Some(3),
            ..Settings::default()
        };
        let config = file.merge(cli).resolve()?;
        assert_eq!(config.input, PathBuf::from("a.json"));
        assert_eq!(config.out_dir, PathBuf::from("reports"));
        assert_eq!(config.limits.top_n, Limit(3));
        assert_eq!(config.range.start, 2018);
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() {
        let res = Settings::parse_toml("topn = 3\n", Path::new("tubetally.toml"));
        assert!(matches!(res, Err(TallyError::Config(_))));
    }

    #[test]
    fn test_load_picks_up_local_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        assert_eq!(Settings::load(None, dir.path())?, Settings::default());

        fs::write(dir.path().join(CONFIG_FILE), "full_limit = 25\n")?;
        let loaded = Settings::load(None, dir.path())?;
        assert_eq!(loaded.full_limit, Some(25));
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let res = Settings::load(Some(&dir.path().join("nope.toml")), dir.path());
        assert!(matches!(res, Err(TallyError::Config(_))));
        Ok(())
    }
}
