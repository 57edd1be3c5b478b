#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn dayjot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dayjot").unwrap();
    cmd.env_remove("DAYJOT_ROOT");
    cmd.env_remove("DAYJOT_EXPORT_DIR");
    cmd.env_remove("DAYJOT_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Fresh temp directory with an initialized journal
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    dayjot_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Overwrite the stored entries with raw JSON
pub fn seed_entries(root: &Path, json: &str) {
    fs::write(root.join(".dayjot").join("journalEntries.json"), json).unwrap();
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Three entries in January 2025 with tags
pub const SAMPLE_ENTRIES: &str = r#"{
  "2025-01-10": {"text": "Old note about the garden", "tags": ["home"], "createdAt": "2025-01-10T08:00:00Z", "updatedAt": "2025-01-10T08:00:00Z"},
  "2025-01-15": {"text": "Sprint planning\nwith \"quotes\"", "tags": ["work", "planning"], "createdAt": "2025-01-15T09:00:00Z", "updatedAt": "2025-01-15T18:00:00Z"},
  "2025-01-20": {"text": "Deploy day", "tags": ["work"], "createdAt": "2025-01-20T10:00:00Z", "updatedAt": "2025-01-20T10:00:00Z"}
}"#;
