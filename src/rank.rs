// src/rank.rs
//! Ordering and truncation of channel counts.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::types::{ChannelKey, ChannelStat, Limit};

/// Human-readable description of [`rank`]'s order, written into payloads.
pub const SORT_ORDER: &str = "watch_count desc, channel_name asc";

/// All channels in `counts`, most watched first.
///
/// Equal counts are ordered by lowercased channel name. The sort is stable, so
/// entries that also share a lowercased name keep the map's key order.
#[must_use]
pub fn rank(counts: &BTreeMap<ChannelKey, u64>) -> Vec<ChannelStat> {
    let mut stats: Vec<ChannelStat> = counts
        .iter()
        .map(|(key, count)| ChannelStat::new(key, *count))
        .collect();
    sort_stats(&mut stats);
    stats
}

/// Sorts by `watch_count` descending, then case-insensitive name ascending.
pub fn sort_stats(stats: &mut [ChannelStat]) {
    stats.sort_by_cached_key(|s| (Reverse(s.watch_count), s.channel_name.to_lowercase()));
}

/// The first `limit` entries of an already ranked list (all of them when unlimited).
#[must_use]
pub fn top_n(ranked: &[ChannelStat], limit: Limit) -> Vec<ChannelStat> {
    let end = limit.cap().map_or(ranked.len(), |n| n.min(ranked.len()));
    ranked[..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, &str, u64)]) -> BTreeMap<ChannelKey, u64> {
        entries
            .iter()
            .map(|(n, u, c)| (ChannelKey::new(*n, *u), *c))
            .collect()
    }

    fn names(stats: &[ChannelStat]) -> Vec<&str> {
        stats.iter().map(|s| s.channel_name.as_str()).collect()
    }

    #[test]
    fn test_count_desc_then_name_asc() {
        let ranked = rank(&counts(&[
            ("beta", "", 3),
            ("Alpha", "", 3),
            ("gamma", "", 7),
            ("Delta", "", 1),
        ]));
        assert_eq!(names(&ranked), vec!["gamma", "Alpha", "beta", "Delta"]);
    }

    #[test]
    fn test_name_comparison_ignores_case() {
        let ranked = rank(&counts(&[("zed", "", 2), ("Bob", "", 2), ("alice", "", 2)]));
        assert_eq!(names(&ranked), vec!["alice", "Bob", "zed"]);
    }

    #[test]
    fn test_unknown_sorts_by_its_text() {
        let ranked = rank(&counts(&[("", "", 1), ("Zoo", "", 1), ("#hash", "", 1)]));
        assert_eq!(names(&ranked), vec!["#hash", "(unknown channel)", "Zoo"]);
    }

    #[test]
    fn test_order_is_total_preorder() {
        let ranked = rank(&counts(&[
            ("a", "", 5),
            ("B", "", 5),
            ("c", "1", 2),
            ("C", "2", 2),
            ("d", "", 9),
        ]));
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.watch_count > b.watch_count
                    || (a.watch_count == b.watch_count
                        && a.channel_name.to_lowercase() <= b.channel_name.to_lowercase())
            );
        }
    }

    #[test]
    fn test_ties_are_repeatable() {
        let map = counts(&[("Same", "x", 4), ("same", "y", 4), ("SAME", "", 4)]);
        assert_eq!(rank(&map), rank(&map));
    }

    #[test]
    fn test_truncation_law() {
        let ranked = rank(&counts(&[("a", "", 1), ("b", "", 2), ("c", "", 3)]));
        assert_eq!(top_n(&ranked, Limit(2)), ranked[..2].to_vec());
        assert_eq!(top_n(&ranked, Limit(0)), ranked);
        assert_eq!(top_n(&ranked, Limit(-1)), ranked);
        assert_eq!(top_n(&ranked, Limit(10)), ranked);
        assert!(top_n(&[], Limit(3)).is_empty());
    }
}
