//! Promote a draft to a published post

use crate::domain::entry::POSTS_DIR;
use crate::domain::{extract_title, format_filename, get_date_time, update_date};
use crate::error::{JekyllError, Result};
use crate::infrastructure::{DocumentHost, FileStore, LocalFileStore};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Move a draft into `post_dir` under a date-prefixed name, refreshing its
/// front matter date.
///
/// The post is fully written before the draft is removed, so any failure
/// leaves the draft in place and the promotion can simply be retried.
pub fn process_draft(draft_path: &Path, post_dir: &Path) -> Result<PathBuf> {
    process_draft_with(&LocalFileStore, draft_path, post_dir)
}

/// [`process_draft`] with the post write and draft removal going through
/// `store`. On every failure only the draft is left on disk.
pub fn process_draft_with(
    store: &dyn FileStore,
    draft_path: &Path,
    post_dir: &Path,
) -> Result<PathBuf> {
    let content = fs::read_to_string(draft_path)?;
    let content = update_date(&content, &get_date_time());

    let title = extract_title(&content)
        .ok_or_else(|| JekyllError::TitleNotFound(draft_path.to_path_buf()))?;

    fs::create_dir_all(post_dir)?;
    let post_path = store.write_unique(post_dir, &format_filename(&title), &content)?;
    if !store.exists(&post_path) {
        return Err(JekyllError::WriteFailed(post_path));
    }
    debug!("Wrote {}", post_path.display());

    let removed = match store.remove(draft_path) {
        Ok(()) => !store.exists(draft_path),
        Err(e) => {
            warn!("Could not remove draft {}: {}", draft_path.display(), e);
            false
        }
    };
    if !removed {
        discard_post(store, &post_path);
        return Err(JekyllError::MoveFailed(post_path));
    }
    if !store.exists(&post_path) {
        return Err(JekyllError::MoveFailed(post_path));
    }

    Ok(post_path)
}

/// Undo the post write after the draft could not be removed
fn discard_post(store: &dyn FileStore, post_path: &Path) {
    match store.remove(post_path) {
        Ok(()) => debug!("Removed {} to keep the draft as the only copy", post_path.display()),
        Err(e) => warn!("Could not remove {}: {}", post_path.display(), e),
    }
}

/// `<draft dir>/../_posts`
pub fn posts_dir_for(draft_path: &Path) -> PathBuf {
    let draft_dir = draft_path.parent().unwrap_or_else(|| Path::new("."));
    match draft_dir.parent() {
        Some(site) => site.join(POSTS_DIR),
        None => draft_dir.join("..").join(POSTS_DIR),
    }
}

/// What the publish command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Published(PathBuf),
    /// The draft is open with unsaved edits and was left alone
    UnsavedChanges,
}

impl PublishOutcome {
    /// Message shown to the user
    pub fn message(&self) -> String {
        match self {
            PublishOutcome::Published(path) => format!(
                "Draft published: {}",
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default()
            ),
            PublishOutcome::UnsavedChanges => "You have unsaved changes in the file. \
                Please save the file before publishing."
                .to_string(),
        }
    }
}

/// Service behind the publish command
pub struct PublishDraftService<'a> {
    documents: &'a dyn DocumentHost,
}

impl<'a> PublishDraftService<'a> {
    pub fn new(documents: &'a dyn DocumentHost) -> Self {
        PublishDraftService { documents }
    }

    /// Publish the draft at `draft_path` into the sibling `_posts` directory
    pub fn execute(&self, draft_path: &Path) -> Result<PublishOutcome> {
        if self.documents.has_unsaved_changes(draft_path)? {
            info!("Refusing to publish {}: unsaved changes", draft_path.display());
            return Ok(PublishOutcome::UnsavedChanges);
        }

        let post_dir = posts_dir_for(draft_path);
        let post_path = process_draft(draft_path, &post_dir)?;
        info!("Published {} as {}", draft_path.display(), post_path.display());

        Ok(PublishOutcome::Published(post_path))
    }
}
