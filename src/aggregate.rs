// src/aggregate.rs
//! Per-year and all-time watch counters for a single run.

use std::collections::BTreeMap;

use crate::classify::{classify, Classification};
use crate::error::Result;
use crate::types::{ChannelKey, RawActivity, YearRange};

/// Counts accumulated for one calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearBucket {
    pub counts: BTreeMap<ChannelKey, u64>,
    pub total: u64,
    /// Emitted per year for output compatibility. Records whose timestamp does
    /// not parse have no year, so nothing is ever attributed here; see
    /// [`RunStats::bad_timestamps`].
    pub time_parse_failures: u64,
}

impl YearBucket {
    #[must_use]
    pub fn unique_channels(&self) -> usize {
        self.counts.len()
    }
}

/// What happened to every record the pass looked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub records: u64,
    pub watched: u64,
    pub not_watched: u64,
    pub bad_timestamps: u64,
    pub out_of_range: u64,
}

/// Aggregation context owned by one pass over the input.
#[derive(Debug, Clone)]
pub struct Tally {
    range: YearRange,
    years: BTreeMap<i32, YearBucket>,
    all_time: BTreeMap<ChannelKey, u64>,
    grand_total: u64,
    stats: RunStats,
}

impl Tally {
    /// Creates an empty bucket for every year in `range`.
    #[must_use]
    pub fn new(range: YearRange) -> Self {
        Self {
            range,
            years: range.years().map(|y| (y, YearBucket::default())).collect(),
            all_time: BTreeMap::new(),
            grand_total: 0,
            stats: RunStats::default(),
        }
    }

    /// Counts one watch of `key` in `year`.
    ///
    /// Returns `false` (and changes nothing) when `year` has no bucket.
    pub fn record(&mut self, year: i32, key: ChannelKey) -> bool {
        let Some(bucket) = self.years.get_mut(&year) else {
            return false;
        };
        *self.all_time.entry(key.clone()).or_insert(0) += 1;
        *bucket.counts.entry(key).or_insert(0) += 1;
        bucket.total += 1;
        self.grand_total += 1;
        true
    }

    /// Classifies `activity` and counts it if it is an in-range watch event.
    pub fn absorb(&mut self, activity: &RawActivity) -> Classification {
        let class = classify(activity, self.range);
        self.stats.records += 1;
        match &class {
            Classification::Watch { year, key } => {
                if self.record(*year, key.clone()) {
                    self.stats.watched += 1;
                }
            }
            Classification::NotWatched => self.stats.not_watched += 1,
            Classification::BadTimestamp => self.stats.bad_timestamps += 1,
            Classification::OutOfRange { .. } => self.stats.out_of_range += 1,
        }
        class
    }

    /// Absorbs every activity from `activities`, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by the iterator.
    pub fn consume<I>(&mut self, activities: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<RawActivity>>,
    {
        for activity in activities {
            self.absorb(&activity?);
        }
        Ok(())
    }

    #[must_use]
    pub fn range(&self) -> YearRange {
        self.range
    }

    #[must_use]
    pub fn year(&self, year: i32) -> Option<&YearBucket> {
        self.years.get(&year)
    }

    /// Buckets in ascending year order.
    pub fn years(&self) -> impl Iterator<Item = (i32, &YearBucket)> {
        self.years.iter().map(|(y, b)| (*y, b))
    }

    #[must_use]
    pub fn all_time(&self) -> &BTreeMap<ChannelKey, u64> {
        &self.all_time
    }

    #[must_use]
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    #[must_use]
    pub fn stats(&self) -> RunStats {
        self.stats
    }
}
