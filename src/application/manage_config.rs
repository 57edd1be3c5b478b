//! Config management use case

use crate::domain::ExportFormat;
use crate::error::{JournalError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::path::PathBuf;
use std::str::FromStr;

const VALID_KEYS: &str = "editor, export_dir, format, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "export_dir" => Ok(config
                .export_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "format" => Ok(config.format.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JournalError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "export_dir" => {
                config.export_dir = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "format" => {
                config.format = ExportFormat::from_str(value).map_err(JournalError::Config)?;
            }
            "created" => {
                return Err(JournalError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JournalError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, export_dir, format",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        crate::application::init::init(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_set_and_get_format() {
        let (_temp, service) = service();
        assert_eq!(service.get("format").unwrap(), "json");
        service.set("format", "CSV").unwrap();
        assert_eq!(service.get("format").unwrap(), "csv");
    }

    #[test]
    fn test_invalid_format_rejected() {
        let (_temp, service) = service();
        match service.set("format", "xml") {
            Err(JournalError::Config(msg)) => assert!(msg.contains("Invalid format")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_export_dir_set_and_clear() {
        let (_temp, service) = service();
        assert_eq!(service.get("export_dir").unwrap(), "");
        service.set("export_dir", "exports").unwrap();
        assert_eq!(service.get("export_dir").unwrap(), "exports");
        service.set("export_dir", "").unwrap();
        assert_eq!(service.get("export_dir").unwrap(), "");
    }

    #[test]
    fn test_created_is_read_only() {
        let (_temp, service) = service();
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        assert!(service.get("mode").is_err());
        assert!(service.set("mode", "daily").is_err());
    }
}
