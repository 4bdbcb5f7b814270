//! Kinds of content a site holds

use std::fmt;

/// Directory a promoted draft is moved into, relative to the drafts folder's parent
pub const POSTS_DIR: &str = "_posts";

/// Whether a new file is a published post or an unpublished draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Post,
    Draft,
}

impl EntryKind {
    /// Prompt shown when asking for a title
    pub fn title_prompt(&self) -> String {
        format!("Enter the title of your new {}", self)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Post => write!(f, "post"),
            EntryKind::Draft => write!(f, "draft"),
        }
    }
}
