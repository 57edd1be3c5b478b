//! Export formats for journal entries
//!
//! Renders a selection of entries as JSON, CSV or plain text. The formatter
//! only produces content; handing it to the user is the caller's concern.

use super::entry::{EntryDate, EntryMap};
use super::query::sorted_by_date_desc;
use crate::error::{JournalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TEXT_RULE_WIDTH: usize = 60;

/// Output format for exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Pretty-printed JSON mapping, same shape as the stored data
    #[default]
    Json,
    /// `Date,Tags,Entry` rows
    Csv,
    /// Human-readable text, newest first
    #[serde(rename = "txt")]
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Text => "text/plain",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "txt" | "text" => Ok(ExportFormat::Text),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: json, csv, txt",
                s
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Rendered export ready to be offered as a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub content: String,
    pub filename: String,
    pub mime_type: &'static str,
    pub entry_count: usize,
}

/// Formatter for exports and backups
pub struct ExportFormatter;

impl ExportFormatter {
    /// Render `entries` as `format`, named `journal-export-<today>.<ext>`.
    ///
    /// # Errors
    ///
    /// [`JournalError::EmptySelection`] when `entries` is empty.
    pub fn render(entries: &EntryMap, format: ExportFormat, today: EntryDate) -> Result<Export> {
        if entries.is_empty() {
            return Err(JournalError::EmptySelection);
        }

        let content = match format {
            ExportFormat::Json => Self::to_json(entries)?,
            ExportFormat::Csv => Self::to_csv(entries),
            ExportFormat::Text => Self::to_text(entries),
        };

        Ok(Export {
            content,
            filename: format!("journal-export-{}.{}", today, format.extension()),
            mime_type: format.mime_type(),
            entry_count: entries.len(),
        })
    }

    /// Full JSON copy of every entry, named `journal-backup-<today>.json`
    pub fn backup(entries: &EntryMap, today: EntryDate) -> Result<Export> {
        let mut export = Self::render(entries, ExportFormat::Json, today)?;
        export.filename = format!("journal-backup-{}.json", today);
        Ok(export)
    }

    pub fn to_json(entries: &EntryMap) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }

    /// Rows follow the map's own iteration order; they are not re-sorted.
    pub fn to_csv(entries: &EntryMap) -> String {
        let mut csv = String::from("Date,Tags,Entry\n");
        for (date, entry) in entries {
            csv.push_str(&format!(
                "\"{}\",\"{}\",\"{}\"\n",
                date,
                csv_field(&entry.tags().join(";")),
                csv_field(entry.text())
            ));
        }
        csv
    }

    pub fn to_text(entries: &EntryMap) -> String {
        let rule = "=".repeat(TEXT_RULE_WIDTH);
        let mut text = String::new();

        for (date, entry) in sorted_by_date_desc(entries.clone()) {
            text.push_str(&rule);
            text.push('\n');
            text.push_str(&format!("Date: {}\n", date.long_form()));
            if !entry.tags().is_empty() {
                text.push_str(&format!("Tags: {}\n", entry.tags().join(", ")));
            }
            text.push_str(&rule);
            text.push('\n');
            text.push_str(entry.text());
            text.push_str("\n\n");
        }

        text
    }
}

/// Double quotes and fold line breaks so each record stays on one line
fn csv_field(value: &str) -> String {
    value
        .replace('"', "\"\"")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
