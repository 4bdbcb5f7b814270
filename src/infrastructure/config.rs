//! Configuration management

use crate::error::{JekyllError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding jekyll-helper settings inside a site root
pub const CONFIG_DIR: &str = ".jekyll-helper";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding `template.path`
pub const TEMPLATE_PATH_ENV: &str = "JEKYLL_HELPER_TEMPLATE_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// Template folder, relative to the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    #[serde(default)]
    pub template: TemplateSettings,
}

impl Config {
    /// Path of the config file for a workspace root
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load config from .jekyll-helper/config.toml; a missing file yields defaults
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let config_path = Self::path_in(root);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(JekyllError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| JekyllError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .jekyll-helper/config.toml in the given directory
    pub fn save_to_dir(&self, root: &Path) -> Result<()> {
        let config_dir = root.join(CONFIG_DIR);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JekyllError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(Self::path_in(root), contents)?;

        Ok(())
    }

    /// Template folder, with the environment override taking precedence
    pub fn template_path(&self) -> Option<String> {
        std::env::var(TEMPLATE_PATH_ENV)
            .ok()
            .or_else(|| self.template.path.clone())
            .filter(|p| !p.trim().is_empty())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .ok()
            .or_else(|| self.editor.clone())
            .unwrap_or_else(Self::default_editor)
    }

    /// Platform editor used when nothing else is configured
    pub(crate) fn default_editor() -> String {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "nano".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(!temp.path().join(CONFIG_DIR).exists());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            editor: Some("code -w".to_string()),
            template: TemplateSettings {
                path: Some("_templates".to_string()),
            },
        };

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".jekyll-helper/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_template_table() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(CONFIG_DIR)).unwrap();
        fs::write(
            Config::path_in(temp.path()),
            "[template]\npath = \"_templates\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.template.path.as_deref(), Some("_templates"));
        assert_eq!(loaded.editor, None);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(CONFIG_DIR)).unwrap();
        fs::write(Config::path_in(temp.path()), "template = 3\n").unwrap();

        let result = Config::load_from_dir(temp.path());
        assert!(matches!(result, Err(JekyllError::Config(_))));
    }

    #[test]
    fn test_get_editor_not_empty() {
        let config = Config::default();
        // EDITOR or VISUAL may be set in the test environment
        assert!(!config.get_editor().is_empty());
    }
}
