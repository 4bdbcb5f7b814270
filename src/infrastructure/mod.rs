//! Infrastructure layer - Host collaborators, configuration and file I/O

pub mod config;
pub mod editor;
pub mod files;
pub mod prompt;
pub mod search;
pub mod workspace;

pub use config::Config;
pub use editor::{DocumentHost, EditorSession};
pub use files::{claim_unique_file, write_unique_file, FileStore, LocalFileStore};
pub use prompt::{PickItem, Prompter, TerminalPrompter};
pub use search::{FileSearch, WalkDirSearch, TEMPLATE_EXCLUDES};
pub use workspace::{FileSystemWorkspace, WorkspaceProvider};
