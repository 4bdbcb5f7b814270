//! Create a post or draft file from a template

use crate::domain::template::post_variables;
use crate::domain::{format_title, get_date_time, load_template};
use crate::error::Result;
use crate::infrastructure::{write_unique_file, WorkspaceProvider};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Result of [`create_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The file was written at this absolute path
    Created(PathBuf),
    /// No workspace root contains the target; nothing was written and the
    /// proposed file name is handed back unchanged
    Unresolved(String),
}

/// Render the template for `title` and write it to a fresh file under
/// `dir_name` (or its parent directory when `dir_name` is a file).
pub fn create_file(
    workspace: &dyn WorkspaceProvider,
    dir_name: Option<&Path>,
    title: &str,
    new_file_name: &str,
    template_name: &str,
) -> Result<CreateOutcome> {
    let Some(dir_name) = dir_name else {
        return Ok(CreateOutcome::Unresolved(new_file_name.to_string()));
    };
    let Some(root) = workspace.root_containing(dir_name) else {
        warn!("{} is not inside any workspace root", dir_name.display());
        return Ok(CreateOutcome::Unresolved(new_file_name.to_string()));
    };

    let dir = if dir_name.is_file() {
        dir_name.parent().unwrap_or(dir_name)
    } else {
        dir_name
    };

    let template_path = workspace.template_path(root)?;
    let template = load_template(root, template_path.as_deref(), template_name)?;
    let content = template.render(&post_variables(&format_title(title), &get_date_time()));

    let path = write_unique_file(dir, new_file_name, &content)?;
    info!("Created {}", path.display());
    Ok(CreateOutcome::Created(path))
}
