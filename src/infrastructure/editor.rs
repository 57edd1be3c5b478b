//! Editor integration for composing entries

use crate::error::{JournalError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Session for editing a draft in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Write `initial` to `draft_path`, let the user edit it, and return the result.
    ///
    /// The draft file is removed afterwards whether or not the editor succeeded.
    pub fn compose(&self, draft_path: &Path, initial: &str) -> Result<String> {
        if let Some(parent) = draft_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(draft_path, initial)?;

        let edited = self
            .edit(draft_path)
            .and_then(|_| fs::read_to_string(draft_path).map_err(JournalError::Io));
        let _ = fs::remove_file(draft_path);
        edited
    }

    /// Open a file in the editor and wait for it to exit
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();
        debug!(%program, path = %file_path.display(), "launching editor");

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            JournalError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(JournalError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback to notepad if command is empty
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_command_simple() {
        let session = EditorSession::new("vim".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "vim");
        assert_eq!(args.len(), 0);
    }

    #[test]
    fn test_parse_command_with_args() {
        let session = EditorSession::new("code -w".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_empty() {
        let session = EditorSession::new("".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "notepad");
        assert_eq!(args.len(), 0);
    }

    #[test]
    fn test_parse_command_with_spaces() {
        let session = EditorSession::new("  vim  -n  ".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "vim");
        assert_eq!(args, vec!["-n"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_returns_unchanged_draft_with_noop_editor() {
        let temp = TempDir::new().unwrap();
        let draft = temp.path().join(".dayjot").join("DRAFT.md");
        let session = EditorSession::new("true".to_string());

        let text = session.compose(&draft, "existing text").unwrap();

        assert_eq!(text, "existing text");
        assert!(!draft.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_reports_failing_editor() {
        let temp = TempDir::new().unwrap();
        let draft = temp.path().join("DRAFT.md");
        let session = EditorSession::new("false".to_string());

        assert!(matches!(
            session.compose(&draft, "x"),
            Err(JournalError::Editor(_))
        ));
        assert!(!draft.exists());
    }

    #[test]
    fn test_missing_editor_binary() {
        let temp = TempDir::new().unwrap();
        let draft = temp.path().join("DRAFT.md");
        let session = EditorSession::new("dayjot-no-such-editor-binary".to_string());

        assert!(matches!(
            session.compose(&draft, "x"),
            Err(JournalError::Editor(_))
        ));
    }
}
