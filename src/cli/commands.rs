//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jekyll-helper")]
#[command(about = "Scaffold Jekyll posts and drafts, and publish drafts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace (site) root; may be repeated. Defaults to the nearest
    /// directory with a _config.yml above the target.
    #[arg(short, long = "workspace", value_name = "DIR", global = true)]
    pub workspaces: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new post from a template
    NewPost {
        /// Directory (or a file inside it) to create the post in
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Post title; prompted for when omitted
        #[arg(short, long)]
        title: Option<String>,

        /// Do not open the new file in the editor
        #[arg(long)]
        no_open: bool,
    },

    /// Create a new draft from a template
    NewDraft {
        /// Directory (or a file inside it) to create the draft in
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Draft title; prompted for when omitted
        #[arg(short, long)]
        title: Option<String>,

        /// Do not open the new file in the editor
        #[arg(long)]
        no_open: bool,
    },

    /// Move a draft into the sibling _posts directory with a fresh date
    Publish {
        /// Draft file to publish
        draft: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (template.path, editor)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
