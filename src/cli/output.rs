//! Output formatting utilities

use crate::domain::{Entry, EntryDate};

/// Format entries as newest-first previews
pub fn format_entry_list(entries: &[(EntryDate, Entry)]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (date, entry) in entries {
        output.push_str(&format!("{}  {}\n", date, date.long_form()));
        output.push_str(&format!("    {}\n", entry.preview().replace('\n', " ")));
        if !entry.tags().is_empty() {
            let tags: Vec<String> = entry.tags().iter().map(|t| format!("#{}", t)).collect();
            output.push_str(&format!("    {}\n", tags.join(" ")));
        }
    }
    output
}

/// Format one entry in full
pub fn format_entry(date: EntryDate, entry: &Entry) -> String {
    let mut output = format!("{}\n", date.long_form());
    if !entry.tags().is_empty() {
        output.push_str(&format!("Tags: {}\n", entry.tags().join(", ")));
    }
    output.push('\n');
    output.push_str(entry.text());
    output.push('\n');
    output
}

/// Format tag counts, one per line
pub fn format_tag_summary(tags: &[(String, usize)]) -> String {
    if tags.is_empty() {
        return "No tags yet".to_string();
    }

    let width = tags.iter().map(|(t, _)| t.chars().count()).max().unwrap_or(0);
    let mut output = String::new();
    for (tag, count) in tags {
        let noun = if *count == 1 { "entry" } else { "entries" };
        output.push_str(&format!("#{:<width$}  {} {}\n", tag, count, noun, width = width));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagSet;
    use chrono::{TimeZone, Utc};

    fn entry(text: &str, tags: &[&str]) -> Entry {
        let at = Utc.with_ymd_and_hms(2025, 1, 17, 8, 0, 0).unwrap();
        Entry::new(text, tags.iter().copied().collect::<TagSet>(), at)
    }

    fn date(s: &str) -> EntryDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![
            (date("2025-01-17"), entry("Line one\nline two", &["work"])),
            (date("2025-01-16"), entry("Quiet day", &[])),
        ];

        let output = format_entry_list(&entries);
        assert_eq!(
            output,
            "2025-01-17  Friday, January 17, 2025\n    Line one line two\n    #work\n\
             2025-01-16  Thursday, January 16, 2025\n    Quiet day\n"
        );
    }

    #[test]
    fn test_format_entry() {
        let output = format_entry(date("2025-01-17"), &entry("Full text", &["a", "b"]));
        assert_eq!(output, "Friday, January 17, 2025\nTags: a, b\n\nFull text\n");
    }

    #[test]
    fn test_format_empty_tag_summary() {
        assert_eq!(format_tag_summary(&[]), "No tags yet");
    }

    #[test]
    fn test_format_tag_summary() {
        let tags = vec![("work".to_string(), 2), ("me".to_string(), 1)];
        assert_eq!(
            format_tag_summary(&tags),
            "#work  2 entries\n#me    1 entry\n"
        );
    }
}
