//! Editor integration for opening posts and detecting unsaved buffers

use crate::error::{JekyllError, Result};
use crate::infrastructure::config::Config;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Document collaborator: shows files to the user and reports dirty buffers
pub trait DocumentHost {
    /// Open a file for editing
    fn open(&self, file_path: &Path) -> Result<()>;

    /// Whether an editor holds unsaved modifications for this file
    fn has_unsaved_changes(&self, file_path: &Path) -> Result<bool>;
}

/// Session for opening files in an external editor
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

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            return (Config::default_editor(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }

    /// Swap and lock files editors leave next to a modified buffer:
    /// vim (`.name.swp`, `.name.swo`) and emacs (`#name#`, `.#name`).
    fn buffer_markers(file_path: &Path) -> Vec<PathBuf> {
        let Some(name) = file_path.file_name().map(|n| n.to_string_lossy()) else {
            return Vec::new();
        };
        let dir = file_path.parent().unwrap_or_else(|| Path::new(""));

        vec![
            dir.join(format!(".{}.swp", name)),
            dir.join(format!(".{}.swo", name)),
            dir.join(format!("#{}#", name)),
            dir.join(format!(".#{}", name)),
        ]
    }
}

impl DocumentHost for EditorSession {
    fn open(&self, file_path: &Path) -> Result<()> {
        if file_path.is_dir() {
            return Err(JekyllError::Editor(format!(
                "{} is a directory",
                file_path.display()
            )));
        }

        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());
        debug!("Opening {} with {}", file_path.display(), program);

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(&program).args(&args);
            cmd.spawn().map_err(|e| {
                JekyllError::Editor(format!("Failed to launch editor '{}': {}", program, e))
            })?;
        }

        #[cfg(not(windows))]
        {
            Command::new(&program).args(&args).spawn().map_err(|e| {
                JekyllError::Editor(format!("Failed to launch editor '{}': {}", program, e))
            })?;
        }

        Ok(())
    }

    fn has_unsaved_changes(&self, file_path: &Path) -> Result<bool> {
        let dirty = Self::buffer_markers(file_path)
            .into_iter()
            .find(|marker| marker.symlink_metadata().is_ok());

        if let Some(marker) = &dirty {
            debug!("Found editor buffer marker {}", marker.display());
        }
        Ok(dirty.is_some())
    }
}
