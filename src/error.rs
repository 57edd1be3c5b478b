//! Error types for dayjot

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dayjot
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No entries found in the selected date range")]
    EmptySelection,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Malformed stored data: {0}")]
    MalformedStoredData(String),

    #[error("Not a dayjot directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::NotJournalDirectory(_) => 2,
            JournalError::InvalidDate(_) => 3,
            JournalError::EmptySelection => 4,
            JournalError::Validation(_) => 5,
            JournalError::StorageUnavailable(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::NotJournalDirectory(path) => {
                format!(
                    "Not a dayjot directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'dayjot init' in this directory to create a new journal\n\
                    • Navigate to an existing dayjot directory\n\
                    • Set DAYJOT_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournalError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates use the YYYY-MM-DD format (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    dayjot show 2025-01-17\n\
                    dayjot export --from 2025-01-01 --to 2025-01-31",
                    input
                )
            }
            JournalError::EmptySelection => "No entries found in the selected date range.\n\n\
                Suggestions:\n\
                • Use 'dayjot list' to see which dates have entries\n\
                • A single --from or --to selects exactly that date\n\
                • Omit both --from and --to to export everything"
                .to_string(),
            JournalError::Validation(msg) => {
                if msg.contains("empty") {
                    format!(
                        "{}\n\n\
                        Please write something before saving.\n\
                        Example: dayjot write --text \"Walked by the river\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            JournalError::StorageUnavailable(msg) => {
                format!(
                    "Storage unavailable: {}\n\n\
                    Changes made in this session may not have been saved.\n\
                    Check that the .dayjot directory is writable and the disk is not full.",
                    msg
                )
            }
            JournalError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: dayjot config editor 'vim'\n\
                    • Skip the editor: dayjot write --text \"...\"",
                    msg
                )
            }
            JournalError::Config(msg) => {
                if msg.contains("Invalid format") {
                    format!(
                        "{}\n\n\
                        Valid formats: json, csv, txt\n\
                        Example: dayjot config format csv",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
