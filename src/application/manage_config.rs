//! Config management use case

use crate::error::{JekyllError, Result};
use crate::infrastructure::Config;
use std::path::{Path, PathBuf};

/// Keys accepted by `config`
pub const CONFIG_KEYS: [&str; 2] = ["template.path", "editor"];

/// Service for managing site configuration
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    /// Create a new config service for a workspace root
    pub fn new(root: &Path) -> Self {
        ConfigService {
            root: root.to_path_buf(),
        }
    }

    /// Get a single config value; unset values are empty
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.root)?;

        match key {
            "template.path" => Ok(config.template.path.unwrap_or_default()),
            "editor" => Ok(config.editor.unwrap_or_default()),
            _ => Err(Self::unknown_key(key)),
        }
    }

    /// Set a config value; an empty value unsets it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.root)?;
        let value = Some(value.to_string()).filter(|v| !v.is_empty());

        match key {
            "template.path" => config.template.path = value,
            "editor" => config.editor = value,
            _ => return Err(Self::unknown_key(key)),
        }

        config.save_to_dir(&self.root)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn unknown_key(key: &str) -> JekyllError {
        JekyllError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: {}",
            key,
            CONFIG_KEYS.join(", ")
        ))
    }
}
