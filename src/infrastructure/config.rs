//! Configuration management

use crate::domain::ExportFormat;
use crate::error::{JournalError, Result};
use crate::infrastructure::repository::JOURNAL_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    /// Export directory; relative paths resolve against the journal root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub format: ExportFormat,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            export_dir: None,
            format: ExportFormat::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .dayjot/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JournalError::NotJournalDirectory(path.to_path_buf())
            } else {
                JournalError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .dayjot/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);
        let config_path = journal_dir.join(CONFIG_FILE);

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Resolve the export directory: DAYJOT_EXPORT_DIR, then config, then the journal root
    pub fn get_export_dir(&self, root: &Path) -> PathBuf {
        let configured = std::env::var_os("DAYJOT_EXPORT_DIR")
            .map(PathBuf::from)
            .or_else(|| self.export_dir.clone());

        match configured {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new();
        assert_eq!(config.format, ExportFormat::Json);
        assert!(config.export_dir.is_none());
        assert!(!config.editor.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.format = ExportFormat::Csv;
        config.export_dir = Some(PathBuf::from("exports"));

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".dayjot").exists());
        assert!(temp.path().join(".dayjot/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.format, ExportFormat::Csv);
        assert_eq!(loaded.export_dir, Some(PathBuf::from("exports")));
        assert_eq!(loaded.editor, config.editor);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_config_with_only_required_keys() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".dayjot")).unwrap();
        fs::write(
            temp.path().join(".dayjot/config.toml"),
            "editor = \"vim\"\ncreated = \"2024-01-01T00:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.editor, "vim");
        assert_eq!(loaded.format, ExportFormat::Json);
        assert!(loaded.export_dir.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            JournalError::NotJournalDirectory(_) => {}
            other => panic!("Expected NotJournalDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".dayjot")).unwrap();
        fs::write(temp.path().join(".dayjot/config.toml"), "format = 12").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(JournalError::TomlDeserialize(_))
        ));
    }

    #[test]
    #[cfg(unix)]
    fn test_export_dir_resolution() {
        let root = Path::new("/journal");
        let mut config = Config::new();

        // DAYJOT_EXPORT_DIR may be set in the environment running the tests
        if std::env::var_os("DAYJOT_EXPORT_DIR").is_none() {
            assert_eq!(config.get_export_dir(root), PathBuf::from("/journal"));

            config.export_dir = Some(PathBuf::from("out"));
            assert_eq!(config.get_export_dir(root), PathBuf::from("/journal/out"));

            config.export_dir = Some(PathBuf::from("/tmp/elsewhere"));
            assert_eq!(config.get_export_dir(root), PathBuf::from("/tmp/elsewhere"));
        }
    }

    #[test]
    fn test_default_editor_detection() {
        let editor = Config::detect_default_editor();
        assert!(!editor.is_empty());

        if cfg!(windows) {
            assert!(
                editor == "notepad"
                    || std::env::var("EDITOR").is_ok()
                    || std::env::var("VISUAL").is_ok()
            );
        } else {
            assert!(
                editor == "nano"
                    || std::env::var("EDITOR").is_ok()
                    || std::env::var("VISUAL").is_ok()
            );
        }
    }
}
