//! Workspace roots and per-root settings

use crate::error::{JekyllError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use log::debug;
use std::path::{Component, Path, PathBuf};

/// Environment variable naming the site root
pub const ROOT_ENV: &str = "JEKYLL_HELPER_ROOT";

/// Files that mark the root of a Jekyll site
const SITE_MARKERS: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Read-only view of the open workspace roots and their configuration
pub trait WorkspaceProvider {
    /// Known workspace roots, in priority order
    fn roots(&self) -> &[PathBuf];

    /// Configured template folder for a root, read fresh on every call
    fn template_path(&self, root: &Path) -> Result<Option<String>>;

    /// First root containing `path`, compared after collapsing `.` and `..`
    fn root_containing(&self, path: &Path) -> Option<&Path> {
        let path = normalize(path);
        self.roots()
            .iter()
            .find(|root| path.starts_with(normalize(root)))
            .map(PathBuf::as_path)
    }
}

/// Workspace backed by site directories on disk
#[derive(Debug, Clone, Default)]
pub struct FileSystemWorkspace {
    roots: Vec<PathBuf>,
}

impl FileSystemWorkspace {
    /// Create a workspace with explicit roots
    pub fn new(roots: Vec<PathBuf>) -> Self {
        let roots = roots.into_iter().map(|r| absolutize(&r)).collect();
        FileSystemWorkspace { roots }
    }

    /// Resolve roots for a target path.
    ///
    /// Explicit roots win, then JEKYLL_HELPER_ROOT, then the nearest
    /// ancestor of `target` that looks like a site root. When nothing is
    /// found the workspace is empty.
    pub fn resolve(explicit: Vec<PathBuf>, target: &Path) -> Self {
        if !explicit.is_empty() {
            return Self::new(explicit);
        }

        if let Ok(root) = std::env::var(ROOT_ENV) {
            debug!("Using {}={}", ROOT_ENV, root);
            return Self::new(vec![PathBuf::from(root)]);
        }

        match Self::discover_from(&absolutize(target)) {
            Some(root) => {
                debug!("Discovered site root {}", root.display());
                Self::new(vec![root])
            }
            None => {
                debug!("No site root found above {}", target.display());
                Self::default()
            }
        }
    }

    /// Walk up from `start` looking for a site root
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| Self::is_site_root(dir))
            .map(Path::to_path_buf)
    }

    /// Single root for commands that need exactly one (e.g. `config`)
    pub fn primary_root(&self) -> Result<&Path> {
        self.roots.first().map(PathBuf::as_path).ok_or_else(|| {
            JekyllError::NotInWorkspace(std::env::current_dir().unwrap_or_default())
        })
    }

    fn is_site_root(dir: &Path) -> bool {
        dir.join(CONFIG_DIR).is_dir() || SITE_MARKERS.iter().any(|m| dir.join(m).is_file())
    }
}

impl WorkspaceProvider for FileSystemWorkspace {
    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn template_path(&self, root: &Path) -> Result<Option<String>> {
        Ok(Config::load_from_dir(root)?.template_path())
    }
}

/// Make a path absolute against the current directory and normalize it,
/// without touching the filesystem
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        std::env::current_dir()
            .map(|cwd| normalize(&cwd.join(path)))
            .unwrap_or_else(|_| normalize(path))
    }
}

/// Lexically drop `.` components and fold `..` into the preceding component.
/// A `..` above the root is discarded; a leading `..` of a relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
