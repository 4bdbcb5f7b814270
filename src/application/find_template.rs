//! Template discovery use case

use crate::error::Result;
use crate::infrastructure::{FileSearch, PickItem, Prompter, WorkspaceProvider, TEMPLATE_EXCLUDES};
use log::{debug, info};
use std::path::Path;

/// Finds the template a new post or draft should be built from
pub struct TemplateResolver<'a> {
    workspace: &'a dyn WorkspaceProvider,
    search: &'a dyn FileSearch,
    prompter: &'a dyn Prompter,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(
        workspace: &'a dyn WorkspaceProvider,
        search: &'a dyn FileSearch,
        prompter: &'a dyn Prompter,
    ) -> Self {
        TemplateResolver {
            workspace,
            search,
            prompter,
        }
    }

    /// Basename of the template to use for `target_dir`, or `""` for the
    /// built-in one. Several candidates are offered to the user; cancelling
    /// the choice also yields `""`.
    pub fn find_template(&self, target_dir: &Path) -> Result<String> {
        let Some(root) = self.workspace.root_containing(target_dir) else {
            debug!("{} is outside every workspace root", target_dir.display());
            return Ok(String::new());
        };
        let Some(template_path) = self.workspace.template_path(root)? else {
            debug!("No template.path configured for {}", root.display());
            return Ok(String::new());
        };

        let templates = self
            .search
            .find_files(&root.join(&template_path), &TEMPLATE_EXCLUDES)?;

        match templates.as_slice() {
            [] => Ok(String::new()),
            [only] => Ok(basename(only)),
            _ => {
                let items: Vec<PickItem> = templates
                    .iter()
                    .map(|t| PickItem {
                        label: basename(t),
                        description: t.display().to_string(),
                    })
                    .collect();

                let chosen = self
                    .prompter
                    .pick_one("Select the template to use", &items)?
                    .and_then(|i| items.get(i))
                    .map(|item| item.label.clone())
                    .unwrap_or_default();
                info!("Selected template '{}'", chosen);
                Ok(chosen)
            }
        }
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
