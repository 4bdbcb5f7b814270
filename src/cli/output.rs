//! Output formatting utilities

use crate::infrastructure::Config;

/// Format configuration for `config --list`
pub fn format_config(config: &Config) -> String {
    format!(
        "template.path = {}\neditor = {}\n",
        config.template.path.as_deref().unwrap_or(""),
        config.editor.as_deref().unwrap_or("")
    )
}
