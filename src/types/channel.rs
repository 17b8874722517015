use serde::Serialize;

/// Name used for watch events that carry no channel reference.
pub const UNKNOWN_CHANNEL: &str = "(unknown channel)";

/// Identity of a channel: exact `(name, url)` pair, no normalization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelKey {
    pub name: String,
    pub url: String,
}

impl ChannelKey {
    /// Builds a key, substituting [`UNKNOWN_CHANNEL`] for an empty name.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: if name.is_empty() {
                UNKNOWN_CHANNEL.to_string()
            } else {
                name
            },
            url: url.into(),
        }
    }
}

/// Final count for one channel, as written to the output files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelStat {
    pub channel_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub channel_url: String,
    pub watch_count: u64,
}

impl ChannelStat {
    #[must_use]
    pub fn new(key: &ChannelKey, watch_count: u64) -> Self {
        Self {
            channel_name: key.name.clone(),
            channel_url: key.url.clone(),
            watch_count,
        }
    }
}
