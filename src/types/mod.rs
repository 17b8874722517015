use serde::{Serialize, Serializer};
use std::fmt;

mod activity;
mod channel;
pub use activity::{RawActivity, Subtitle};
pub use channel::{ChannelKey, ChannelStat, UNKNOWN_CHANNEL};

/// Inclusive range of calendar years a run buckets records into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    #[must_use]
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Every year in the range, ascending. Empty when `start > end`.
    pub fn years(self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(2020, 2026)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A "top N" size. Zero or negative means unlimited.
///
/// Serializes as the raw configured number so payloads echo what the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limit(pub i64);

impl Limit {
    pub const UNLIMITED: Self = Self(0);

    /// The cap to apply, or `None` when every entry is kept.
    #[must_use]
    pub fn cap(self) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|n| *n > 0)
    }
}

impl From<i64> for Limit {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cap() {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_is_inclusive() {
        let range = YearRange::new(2020, 2022);
        assert!(range.contains(2020));
        assert!(range.contains(2022));
        assert!(!range.contains(2019));
        assert!(!range.contains(2023));
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2020, 2021, 2022]);
    }

    #[test]
    fn test_limit_cap() {
        assert_eq!(Limit(6).cap(), Some(6));
        assert_eq!(Limit(0).cap(), None);
        assert_eq!(Limit(-3).cap(), None);
        assert_eq!(Limit::UNLIMITED.cap(), None);
    }

    #[test]
    fn test_limit_serializes_raw_value() {
        assert_eq!(serde_json::to_string(&Limit(-1)).ok().as_deref(), Some("-1"));
        assert_eq!(serde_json::to_string(&Limit(100)).ok().as_deref(), Some("100"));
    }
}
