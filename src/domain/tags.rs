//! Tag normalization and aggregation
//!
//! Tags are entered as comma-separated text. They are trimmed, lowercased and
//! deduplicated before they reach an entry; aggregates are recomputed from
//! the entries on demand rather than indexed.
//!
//! # Examples
//!
//! ```
//! use dayjot::domain::tags;
//!
//! assert_eq!(tags::normalize("Work, work, Home ,  ,Home"), vec!["work", "home"]);
//! ```

use super::entry::{EntryMap, TagSet};
use std::collections::HashMap;

/// Longest accepted tag, in characters
pub const MAX_TAG_LEN: usize = 30;

/// Whether `tag` satisfies the length constraint (1 to [`MAX_TAG_LEN`] characters)
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().count() <= MAX_TAG_LEN
}

/// Split comma-separated input into normalized tags.
///
/// Segments are trimmed and lowercased; empty or over-length segments are
/// dropped and repeats keep their first position.
pub fn normalize(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for segment in raw.split(',') {
        let tag = segment.trim().to_lowercase();
        if is_valid_tag(&tag) && !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Union of `current` and the normalized `raw` input, as a new set.
///
/// Existing tags keep their order; new ones are appended in input order.
pub fn add_tags(current: &TagSet, raw: &str) -> TagSet {
    let mut merged = current.clone();
    for tag in normalize(raw) {
        merged.insert(tag);
    }
    merged
}

/// `current` without `tag`. Removing an absent tag is a no-op.
pub fn remove_tag(current: &TagSet, tag: &str) -> TagSet {
    current.iter().filter(|t| t.as_str() != tag).cloned().collect()
}

/// Per-tag entry counts in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts {
    counts: Vec<(String, usize)>,
}

impl TagCounts {
    pub fn get(&self, tag: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, count)| *count)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count how many entries carry each tag.
///
/// Entries are walked in ascending date order, which fixes the iteration
/// order of the result for a given snapshot.
pub fn aggregate(entries: &EntryMap) -> TagCounts {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for entry in entries.values() {
        for tag in entry.tags() {
            match positions.get(tag.as_str()) {
                Some(&index) => counts[index].1 += 1,
                None => {
                    positions.insert(tag.as_str(), counts.len());
                    counts.push((tag.clone(), 1));
                }
            }
        }
    }

    TagCounts { counts }
}

/// Tags ordered by count, most used first.
///
/// Ties keep the aggregate's own order; no alphabetical tie-break is applied.
pub fn sorted_by_frequency_desc(counts: &TagCounts) -> Vec<(String, usize)> {
    let mut sorted = counts.counts.clone();
    // stable
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}
