// src/classify.rs
//! Decides whether an activity is a watch event and where it is counted.

use chrono::{DateTime, Datelike, Timelike};

use crate::types::{ChannelKey, RawActivity, YearRange};

const WATCH_PREFIX: &str = "watched ";

/// Outcome of classifying one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Counted under `year` for channel `key`.
    Watch { year: i32, key: ChannelKey },
    /// Title is not a watch action ("Visited ...", empty, ...).
    NotWatched,
    /// Watch event whose `time` is not RFC 3339.
    BadTimestamp,
    /// Watch event outside the configured years.
    OutOfRange { year: i32 },
}

/// Classifies a single activity against the configured year range.
#[must_use]
pub fn classify(activity: &RawActivity, range: YearRange) -> Classification {
    if !is_watch_title(&activity.title) {
        return Classification::NotWatched;
    }

    let Some(year) = event_year(&activity.time) else {
        return Classification::BadTimestamp;
    };

    if !range.contains(year) {
        return Classification::OutOfRange { year };
    }

    let (name, url) = channel_of(activity);
    Classification::Watch {
        year,
        key: ChannelKey::new(name, url),
    }
}

/// True when the trimmed, lowercased title starts with `"watched "`.
#[must_use]
pub fn is_watch_title(title: &str) -> bool {
    title.trim().to_lowercase().starts_with(WATCH_PREFIX)
}

/// Year of an RFC 3339 timestamp, in the offset the timestamp carries.
///
/// Only the strict form is accepted: uppercase `T` separator, `Z` or `±hh:mm`
/// offset, and no leap second.
#[must_use]
pub fn event_year(time: &str) -> Option<i32> {
    let time = time.trim();
    if !has_strict_shape(time.as_bytes()) {
        return None;
    }
    let t = DateTime::parse_from_rfc3339(time).ok()?;
    (t.nanosecond() < 1_000_000_000).then(|| t.year())
}

fn has_strict_shape(bytes: &[u8]) -> bool {
    if bytes.get(10) != Some(&b'T') {
        return false;
    }
    match bytes.last() {
        Some(b'Z') => true,
        _ => {
            let n = bytes.len();
            n >= 6 && matches!(bytes[n - 6], b'+' | b'-') && bytes[n - 3] == b':'
        }
    }
}

/// Trimmed name and url of the first subtitle, or empty strings.
#[must_use]
pub fn channel_of(activity: &RawActivity) -> (&str, &str) {
    activity
        .subtitles
        .first()
        .map_or(("", ""), |s| (s.name.trim(), s.url.trim()))
}
