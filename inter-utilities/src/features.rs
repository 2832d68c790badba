//! Parsing and normalization of OpenType feature specifications.
//!
//! Themes describe a group of features in one of several shapes: a mapping
//! of tag to value, a comma-separated string, or a list of strings, pairs
//! and single-entry mappings. All of these are reduced to a
//! [`FeatureSettings`], an ordered set of `(tag, value)` pairs restricted to
//! the features the typeface actually provides, which can then be rendered
//! as a `font-feature-settings` value.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{ScalarValue, Tag};

/// The CSS keyword that resets feature settings.
pub const NORMAL: &str = "normal";

/// The value of a feature that is switched on.
const ENABLED: &str = "1";

/// The value of a feature that is switched off.
const DISABLED: &str = "0";

/// A feature group, as written in a theme.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeatureSpec {
    /// Comma-separated `tag [value]` tokens, or the keyword `normal`.
    Text(String),
    List(Vec<FeatureEntry>),
    /// Tag to value; a missing value enables the feature.
    Map(IndexMap<String, Option<ScalarValue>>),
}

/// A single element of a [`FeatureSpec::List`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeatureEntry {
    /// `"tnum"` or `"ss02 0"`
    Text(String),
    /// `["tnum", 1]` or `["tnum"]`
    Sequence(Vec<ScalarValue>),
    /// `{ "tnum": true }`
    Mapping(IndexMap<String, Option<ScalarValue>>),
}

impl FeatureSpec {
    /// `true` if this spec is the `normal` keyword.
    pub fn is_normal(&self) -> bool {
        matches!(self, FeatureSpec::Text(text) if text.trim() == NORMAL)
    }
}

impl From<&str> for FeatureSpec {
    fn from(src: &str) -> Self {
        FeatureSpec::Text(src.to_owned())
    }
}

impl<const N: usize> From<[&str; N]> for FeatureSpec {
    fn from(src: [&str; N]) -> Self {
        FeatureSpec::List(
            src.into_iter()
                .map(|entry| FeatureEntry::Text(entry.to_owned()))
                .collect(),
        )
    }
}

/// A feature tag paired with the value it should be set to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureSetting {
    pub tag: Tag,
    pub value: String,
}

impl FeatureSetting {
    pub fn new(tag: Tag, value: impl Into<String>) -> Self {
        FeatureSetting {
            tag,
            value: value.into(),
        }
    }

    /// This setting as it appears in `font-feature-settings`.
    fn to_css(&self) -> String {
        format!("\"{}\" {}", self.tag, self.value)
    }
}

/// An ordered set of feature settings with unique tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSettings(Vec<FeatureSetting>);

impl FeatureSettings {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureSetting> + '_ {
        self.0.iter()
    }

    /// The value set for `tag`, if any.
    pub fn get(&self, tag: Tag) -> Option<&str> {
        self.0
            .iter()
            .find(|setting| setting.tag == tag)
            .map(|setting| setting.value.as_str())
    }

    /// Explicitly switch off every available feature that is not set.
    pub fn disable_unused(&mut self, available: &BTreeSet<Tag>) {
        for tag in available {
            if self.get(*tag).is_none() {
                self.0.push(FeatureSetting::new(*tag, DISABLED));
            }
        }
    }

    /// Render these settings as a `font-feature-settings` value.
    ///
    /// Entries are sorted so output does not depend on input order. An
    /// empty string means there is nothing to set and the declaration
    /// should be omitted.
    pub fn to_css(&self) -> String {
        let mut rendered = self
            .0
            .iter()
            .map(FeatureSetting::to_css)
            .collect::<Vec<_>>();
        rendered.sort();
        rendered.join(", ")
    }
}

/// Normalize a feature spec against the features a typeface provides.
///
/// Tags that are not in `available` (including strings that are not valid
/// OpenType tags at all) are dropped. If a tag occurs more than once, the
/// last value wins and the first position is kept.
pub fn normalize(spec: &FeatureSpec, available: &BTreeSet<Tag>) -> FeatureSettings {
    let mut raw = Vec::new();
    match spec {
        FeatureSpec::Text(text) => parse_text(text, &mut raw),
        FeatureSpec::Map(map) => raw.extend(
            map.iter()
                .map(|(tag, value)| (tag.clone(), value.as_ref().map(ToString::to_string))),
        ),
        FeatureSpec::List(entries) => {
            for entry in entries {
                match entry {
                    FeatureEntry::Text(text) => parse_text(text, &mut raw),
                    FeatureEntry::Sequence(items) => {
                        if let Some(tag) = items.first() {
                            raw.push((tag.to_string(), items.get(1).map(ToString::to_string)));
                        }
                    }
                    FeatureEntry::Mapping(map) => {
                        if let Some((tag, value)) = map.first() {
                            raw.push((tag.clone(), value.as_ref().map(ToString::to_string)));
                        }
                    }
                }
            }
        }
    }

    let mut settings = IndexMap::<Tag, String>::new();
    for (tag, value) in raw {
        let (tag, value) = normalize_entry(&tag, value);
        match tag.parse::<Tag>() {
            Ok(tag) if available.contains(&tag) => {
                settings.insert(tag, value);
            }
            _ => log::debug!("dropping unsupported feature '{tag}'"),
        }
    }
    FeatureSettings(
        settings
            .into_iter()
            .map(|(tag, value)| FeatureSetting { tag, value })
            .collect(),
    )
}

/// Read comma-separated `tag [value]` tokens.
///
/// A word following a tag is taken as its value only if it looks like one
/// (an integer, `on` or `off`); otherwise it is the next tag, so that
/// `"tnum salt"` enables both features.
fn parse_text(text: &str, raw: &mut Vec<(String, Option<String>)>) {
    for token in text.split(',') {
        let mut words = token.split_whitespace().peekable();
        while let Some(tag) = words.next() {
            let value = words.next_if(|word| is_value(word)).map(str::to_owned);
            raw.push((tag.to_owned(), value));
        }
    }
}

fn is_value(word: &str) -> bool {
    word.parse::<i64>().is_ok()
        || word.eq_ignore_ascii_case("on")
        || word.eq_ignore_ascii_case("off")
}

fn normalize_entry(tag: &str, value: Option<String>) -> (String, String) {
    let value = match value {
        Some(value) if value != "undefined" => value,
        _ => ENABLED.to_owned(),
    };
    (unquote(tag).to_owned(), value)
}

fn unquote(src: &str) -> &str {
    let src = src.trim();
    let src = src.strip_prefix(['"', '\'']).unwrap_or(src);
    let src = src.strip_suffix(['"', '\'']).unwrap_or(src);
    src.trim()
}
