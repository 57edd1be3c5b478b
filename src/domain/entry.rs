//! Journal entry model

use crate::error::{JournalError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Number of characters shown in a list preview before truncation
pub const PREVIEW_CHARS: usize = 150;

/// Calendar date keying an entry, always rendered as `YYYY-MM-DD`.
///
/// Ordering matches lexicographic ordering of the rendered string, so range
/// checks on dates and on their ISO text agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
    pub fn new(date: NaiveDate) -> Self {
        EntryDate(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Long form used in listings and plain-text exports, e.g. `Monday, January 15, 2024`
    pub fn long_form(&self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }
}

impl From<NaiveDate> for EntryDate {
    fn from(date: NaiveDate) -> Self {
        EntryDate(date)
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for EntryDate {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let bytes = input.as_bytes();

        // chrono accepts unpadded fields; keys must stay fixed-width to sort as text
        let well_formed = bytes.len() == 10
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
        if !well_formed {
            return Err(JournalError::InvalidDate(s.to_string()));
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(EntryDate)
            .map_err(|_| JournalError::InvalidDate(s.to_string()))
    }
}

impl Serialize for EntryDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntryDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Ordered, duplicate-free collection of tags.
///
/// Insertion order is kept for display only; equality still compares order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        TagSet(Vec::new())
    }

    /// Append `tag` unless already present. Returns true when inserted.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One journal record. The date lives in the owning map as the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    text: String,
    tags: TagSet,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a first revision with both timestamps set to `at`
    pub fn new(text: impl Into<String>, tags: TagSet, at: DateTime<Utc>) -> Self {
        Entry {
            text: text.into(),
            tags,
            created_at: at,
            updated_at: at,
        }
    }

    /// Replace text and tags, keeping `created_at`.
    ///
    /// `updated_at` never moves backwards, so it stays `>= created_at` even
    /// when the wall clock does.
    pub(crate) fn revised(&self, text: impl Into<String>, tags: TagSet, at: DateTime<Utc>) -> Self {
        Entry {
            text: text.into(),
            tags,
            created_at: self.created_at,
            updated_at: at.max(self.updated_at),
        }
    }

    /// Raise `updated_at` to `created_at` if stored timestamps are inverted.
    /// Returns whether the entry changed.
    pub(crate) fn clamp_updated_at(&mut self) -> bool {
        if self.updated_at < self.created_at {
            self.updated_at = self.created_at;
            true
        } else {
            false
        }
    }

    /// Drop tags rejected by `keep`, returning the dropped ones
    pub(crate) fn retain_tags(&mut self, keep: impl Fn(&str) -> bool) -> Vec<String> {
        let (kept, dropped): (Vec<String>, Vec<String>) =
            Vec::from(std::mem::take(&mut self.tags))
                .into_iter()
                .partition(|tag| keep(tag.as_str()));
        self.tags = TagSet::from(kept);
        dropped
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// First [`PREVIEW_CHARS`] characters of the text, with `...` when cut
    pub fn preview(&self) -> String {
        let mut chars = self.text.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}

/// Date-keyed entries, iterated in ascending date order
pub type EntryMap = BTreeMap<EntryDate, Entry>;
