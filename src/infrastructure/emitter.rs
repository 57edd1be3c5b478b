//! File emission: handing generated exports to the user

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Offers generated content to the user as a file
pub trait FileEmitter {
    fn emit(&mut self, content: &str, filename: &str, mime_type: &str) -> Result<()>;
}

/// Writes emitted files into a directory, creating it if needed
#[derive(Debug, Clone)]
pub struct DirectoryEmitter {
    dir: PathBuf,
    last: Option<PathBuf>,
}

impl DirectoryEmitter {
    pub fn new(dir: PathBuf) -> Self {
        DirectoryEmitter { dir, last: None }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the most recently written file
    pub fn last_path(&self) -> Option<&Path> {
        self.last.as_deref()
    }
}

impl FileEmitter for DirectoryEmitter {
    fn emit(&mut self, content: &str, filename: &str, mime_type: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        // Keep to a bare file name inside the target directory
        let name = Path::new(filename)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "journal-export".into());
        let path = self.dir.join(name);

        fs::write(&path, content)?;
        info!(path = %path.display(), mime_type, "wrote export");
        self.last = Some(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_emit_writes_file() {
        let temp = TempDir::new().unwrap();
        let mut emitter = DirectoryEmitter::new(temp.path().join("exports"));

        emitter
            .emit("hello", "journal-export-2024-01-01.txt", "text/plain")
            .unwrap();

        let path = temp.path().join("exports/journal-export-2024-01-01.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(emitter.last_path(), Some(path.as_path()));
    }

    #[test]
    fn test_emit_strips_directories_from_name() {
        let temp = TempDir::new().unwrap();
        let mut emitter = DirectoryEmitter::new(temp.path().to_path_buf());

        emitter.emit("x", "../outside.json", "application/json").unwrap();

        assert!(temp.path().join("outside.json").exists());
    }
}
