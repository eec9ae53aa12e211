//! Editor integration for composing entries

use crate::error::{JournalError, Result};
use std::path::Path;
use std::process::Command;

/// Session for editing a file in an external editor
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

    /// Open a file in the editor and block until the editor exits
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program);
            cmd
        } else {
            Command::new(&program)
        };

        let status = cmd.args(&args).status().map_err(|e| {
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

        let Some((program, rest)) = parts.split_first() else {
            let fallback = if cfg!(windows) { "notepad" } else { "nano" };
            return (fallback.to_string(), vec![]);
        };

        (
            program.to_string(),
            rest.iter().map(|s| s.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_simple() {
        let session = EditorSession::new("vim".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "vim");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_command_with_args() {
        let session = EditorSession::new("  code   -w ".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_empty_falls_back() {
        let session = EditorSession::new("".to_string());
        let (program, args) = session.parse_command();

        assert!(program == "nano" || program == "notepad");
        assert!(args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_reports_failing_editor() {
        let temp = tempfile::TempDir::new().unwrap();
        let session = EditorSession::new("false".to_string());

        match session.edit(&temp.path().join("draft.txt")) {
            Err(JournalError::Editor(msg)) => assert!(msg.contains("exited")),
            other => panic!("Expected Editor error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_missing_program() {
        let temp = tempfile::TempDir::new().unwrap();
        let session = EditorSession::new("moodjour-no-such-editor-xyz".to_string());

        match session.edit(&temp.path().join("draft.txt")) {
            Err(JournalError::Editor(msg)) => assert!(msg.contains("Failed to launch")),
            other => panic!("Expected Editor error, got {:?}", other),
        }
    }
}
