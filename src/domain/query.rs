//! Read-only entry selection by date, date range and tag

use super::entry::{Entry, EntryDate, EntryMap};

/// Entries restricted to `date` (empty when there is none)
pub fn by_date(entries: &EntryMap, date: EntryDate) -> EntryMap {
    entries
        .get_key_value(&date)
        .map(|(d, e)| (*d, e.clone()))
        .into_iter()
        .collect()
}

/// Entries whose tag set contains `tag`, in map order
pub fn by_tag(entries: &EntryMap, tag: &str) -> Vec<(EntryDate, Entry)> {
    entries
        .iter()
        .filter(|(_, entry)| entry.tags().contains(tag))
        .map(|(date, entry)| (*date, entry.clone()))
        .collect()
}

/// Select entries for an export range.
///
/// - no bounds: everything
/// - one bound: exactly that date (a single bound is a date pick, not an open range)
/// - both bounds: `start <= date <= end`, inclusive
pub fn by_date_range(
    entries: &EntryMap,
    start: Option<EntryDate>,
    end: Option<EntryDate>,
) -> EntryMap {
    match (start, end) {
        (None, None) => entries.clone(),
        (Some(date), None) | (None, Some(date)) => by_date(entries, date),
        (Some(start), Some(end)) => entries
            .iter()
            .filter(|(date, _)| start <= **date && **date <= end)
            .map(|(date, entry)| (*date, entry.clone()))
            .collect(),
    }
}

/// Newest first
pub fn sorted_by_date_desc<I>(entries: I) -> Vec<(EntryDate, Entry)>
where
    I: IntoIterator<Item = (EntryDate, Entry)>,
{
    let mut sorted: Vec<(EntryDate, Entry)> = entries.into_iter().collect();
    sorted.sort_by(|a, b| b.0.cmp(&a.0));
    sorted
}
