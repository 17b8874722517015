//! Raw records from a watch-history export.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// One element of the exported activity array.
///
/// Only the fields needed for classification are kept; everything else in the
/// object is skipped by serde. Missing fields and explicit `null`s both decode
/// to the empty value. Invalid UTF-8 inside a string field becomes U+FFFD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawActivity {
    #[serde(alias = "Title", alias = "TITLE")]
    #[serde(default, deserialize_with = "lossy_string")]
    pub title: String,
    #[serde(
        rename = "titleUrl",
        alias = "titleURL",
        alias = "TitleUrl",
        alias = "TitleURL",
        alias = "titleurl"
    )]
    #[serde(default, deserialize_with = "lossy_string")]
    pub title_url: String,
    #[serde(alias = "Time", alias = "TIME")]
    #[serde(default, deserialize_with = "lossy_string")]
    pub time: String,
    #[serde(alias = "Subtitles", alias = "SUBTITLES")]
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitles: Vec<Subtitle>,
}

/// Channel reference attached to an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Subtitle {
    #[serde(alias = "Name", alias = "NAME")]
    #[serde(default, deserialize_with = "lossy_string")]
    pub name: String,
    #[serde(alias = "Url", alias = "URL")]
    #[serde(default, deserialize_with = "lossy_string")]
    pub url: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A string field read as raw bytes, with invalid UTF-8 replaced by U+FFFD.
struct LossyString(String);

struct LossyStringVisitor;

impl<'de> Visitor<'de> for LossyStringVisitor {
    type Value = LossyString;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(LossyString(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(LossyString(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(LossyString(String::from_utf8_lossy(v).into_owned()))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        let s = String::from_utf8(v)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
        Ok(LossyString(s))
    }
}

impl<'de> Deserialize<'de> for LossyString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_json answers `deserialize_bytes` on a string with the unescaped
        // bytes, before any UTF-8 check.
        deserializer.deserialize_bytes(LossyStringVisitor)
    }
}

/// `null`-tolerant string field that never fails on invalid UTF-8.
fn lossy_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LossyString>::deserialize(deserializer)?
        .map(|s| s.0)
        .unwrap_or_default())
}
