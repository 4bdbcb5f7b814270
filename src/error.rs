//! Error types for jekyll-helper

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jekyll-helper
#[derive(Debug, Error)]
pub enum JekyllError {
    #[error("No title provided.")]
    NoTitleProvided,

    #[error("Not inside a known workspace: {0}")]
    NotInWorkspace(PathBuf),

    #[error("Title not found in the front matter of {0}")]
    TitleNotFound(PathBuf),

    #[error("Failed to move file to {0}")]
    MoveFailed(PathBuf),

    #[error("Failed to write updated content to {0}")]
    WriteFailed(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JekyllError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JekyllError::NoTitleProvided => 2,
            JekyllError::NotInWorkspace(_) => 3,
            JekyllError::TitleNotFound(_) => 4,
            JekyllError::MoveFailed(_) | JekyllError::WriteFailed(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JekyllError::NotInWorkspace(path) => {
                format!(
                    "Not inside a known workspace: {}\n\n\
                    Suggestions:\n\
                    • Run the command from inside your Jekyll site (a directory with _config.yml)\n\
                    • Pass the site root explicitly: jekyll-helper --workspace <DIR> ...\n\
                    • Set JEKYLL_HELPER_ROOT environment variable to your site path",
                    path.display()
                )
            }
            JekyllError::TitleNotFound(path) => {
                format!(
                    "Title not found in the front matter of {}\n\n\
                    The draft must contain a double-quoted title, e.g.:\n\
                    ---\n\
                    title: \"My Post\"\n\
                    ---",
                    path.display()
                )
            }
            JekyllError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: jekyll-helper config editor 'code -w'\n\
                    • Skip opening the file: --no-open",
                    msg
                )
            }
            JekyllError::Config(msg) if msg.contains("Unknown config key") => {
                format!(
                    "{}\n\n\
                    Example: jekyll-helper config template.path _templates",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JekyllError
pub type Result<T> = std::result::Result<T, JekyllError>;
