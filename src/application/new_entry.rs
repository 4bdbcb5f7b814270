//! New post / new draft use case

use crate::application::create_file::{create_file, CreateOutcome};
use crate::application::find_template::TemplateResolver;
use crate::domain::{format_filename, EntryKind};
use crate::error::{JekyllError, Result};
use crate::infrastructure::{DocumentHost, FileSearch, Prompter, WorkspaceProvider};
use log::debug;
use std::path::{Path, PathBuf};

/// Service behind the new-post and new-draft commands
pub struct NewEntryService<'a> {
    workspace: &'a dyn WorkspaceProvider,
    search: &'a dyn FileSearch,
    prompter: &'a dyn Prompter,
    documents: &'a dyn DocumentHost,
}

impl<'a> NewEntryService<'a> {
    pub fn new(
        workspace: &'a dyn WorkspaceProvider,
        search: &'a dyn FileSearch,
        prompter: &'a dyn Prompter,
        documents: &'a dyn DocumentHost,
    ) -> Self {
        NewEntryService {
            workspace,
            search,
            prompter,
            documents,
        }
    }

    /// Create a new post or draft in `target` and optionally open it.
    ///
    /// `title` skips the title prompt when given.
    pub fn execute(
        &self,
        kind: EntryKind,
        target: &Path,
        title: Option<String>,
        open_in_editor: bool,
    ) -> Result<PathBuf> {
        let template_name =
            TemplateResolver::new(self.workspace, self.search, self.prompter).find_template(target)?;

        let title = match title {
            Some(t) => Some(t),
            None => self
                .prompter
                .input_text(&kind.title_prompt(), "Title of your new post")?,
        }
        .filter(|t| !t.is_empty())
        .ok_or(JekyllError::NoTitleProvided)?;

        let file_name = format_filename(&title);
        debug!("New {} '{}' as {}", kind, title, file_name);

        let path = match create_file(
            self.workspace,
            Some(target),
            &title,
            &file_name,
            &template_name,
        )? {
            CreateOutcome::Created(path) => path,
            CreateOutcome::Unresolved(_) => {
                return Err(JekyllError::NotInWorkspace(target.to_path_buf()))
            }
        };

        if open_in_editor {
            self.documents.open(&path)?;
        }

        Ok(path)
    }
}
