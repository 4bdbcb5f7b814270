//! In-memory host collaborators for service tests

use crate::error::Result;
use crate::infrastructure::{DocumentHost, PickItem, Prompter, WorkspaceProvider};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Single-root workspace with a fixed template path
pub struct FakeWorkspace {
    roots: Vec<PathBuf>,
    template_path: Option<String>,
}

impl FakeWorkspace {
    pub fn new(root: &Path, template_path: Option<&str>) -> Self {
        FakeWorkspace {
            roots: vec![root.to_path_buf()],
            template_path: template_path.map(str::to_string),
        }
    }
}

impl WorkspaceProvider for FakeWorkspace {
    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn template_path(&self, _root: &Path) -> Result<Option<String>> {
        Ok(self.template_path.clone())
    }
}

/// Prompter answering from a script and recording what it was asked
#[derive(Default)]
pub struct ScriptedPrompter {
    text: Option<String>,
    pick: Option<usize>,
    prompts: RefCell<Vec<String>>,
    picks: RefCell<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn with_text(mut self, text: Option<&str>) -> Self {
        self.text = text.map(str::to_string);
        self
    }

    pub fn with_pick(mut self, pick: Option<usize>) -> Self {
        self.pick = pick;
        self
    }

    pub fn prompts_shown(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn picks_shown(&self) -> Vec<Vec<String>> {
        self.picks.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn input_text(&self, prompt: &str, _placeholder: &str) -> Result<Option<String>> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.text.clone())
    }

    fn pick_one(&self, _placeholder: &str, items: &[PickItem]) -> Result<Option<usize>> {
        self.picks
            .borrow_mut()
            .push(items.iter().map(|i| i.label.clone()).collect());
        Ok(self.pick)
    }
}

/// Document host that records opened files instead of launching an editor
#[derive(Default)]
pub struct RecordingDocuments {
    dirty: bool,
    opened: RefCell<Vec<PathBuf>>,
}

impl RecordingDocuments {
    pub fn dirty() -> Self {
        RecordingDocuments {
            dirty: true,
            ..Default::default()
        }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }
}

impl DocumentHost for RecordingDocuments {
    fn open(&self, file_path: &Path) -> Result<()> {
        self.opened.borrow_mut().push(file_path.to_path_buf());
        Ok(())
    }

    fn has_unsaved_changes(&self, _file_path: &Path) -> Result<bool> {
        Ok(self.dirty)
    }
}
