//! jekyll-helper - Jekyll post and draft scaffolding
//!
//! Creates date-prefixed posts and drafts from front matter templates and
//! promotes drafts into the site's `_posts` directory with a fresh date.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JekyllError;
