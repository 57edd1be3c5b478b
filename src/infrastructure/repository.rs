//! File system repository

use crate::error::{JournalError, Result};
use crate::infrastructure::{Config, FileKeyValueStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the journal root holding config and stored entries
pub const JOURNAL_DIR: &str = ".dayjot";

const DRAFT_FILE: &str = "DRAFT.md";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .dayjot/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .dayjot/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .dayjot directory exists
    fn is_initialized(&self) -> bool;

    /// Create .dayjot directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks DAYJOT_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYJOT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(JournalError::Config(format!(
                    "DAYJOT_ROOT is set to '{}' but no .dayjot directory found. \
                    Run 'dayjot init' in that directory or unset DAYJOT_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_journal_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(JournalError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    /// Persistence port backed by files in .dayjot/
    pub fn storage(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(self.root.join(JOURNAL_DIR))
    }

    /// Scratch file handed to the editor when composing an entry
    pub fn draft_path(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR).join(DRAFT_FILE)
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let journal_dir = self.root.join(JOURNAL_DIR);

        if journal_dir.exists() {
            return Err(JournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&journal_dir)?;
        Ok(())
    }
}
