//! Collision-free file creation

use crate::domain::filename::numbered_filename;
use crate::error::{JekyllError, Result};
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Atomically create `dir/file_name`, or `dir/<stem>-N<ext>` for the first
/// free N starting at 1. Existing files are never opened.
pub fn claim_unique_file(dir: &Path, file_name: &str) -> Result<(PathBuf, File)> {
    let mut candidate = dir.join(file_name);
    let mut counter = 0;

    loop {
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => {
                debug!("Claimed {}", candidate.display());
                return Ok((candidate, file));
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                counter += 1;
                candidate = dir.join(numbered_filename(file_name, counter));
            }
            Err(e) => return Err(JekyllError::Io(e)),
        }
    }
}

/// Create a uniquely named file and write `content` into it.
///
/// A failed write removes the partially written file so no half-written
/// file is left behind.
pub fn write_unique_file(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let (path, mut file) = claim_unique_file(dir, file_name)?;

    write_or_discard(path, |path| {
        let written = file.write_all(content.as_bytes()).and_then(|_| file.sync_all());
        drop(file);
        debug!("Wrote {} bytes to {}", content.len(), path.display());
        written
    })
}

/// Run `write` for an already claimed `path`; on failure the file is removed
/// and `WriteFailed` is returned.
fn write_or_discard<F>(path: PathBuf, write: F) -> Result<PathBuf>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    match write(&path) {
        Ok(()) => Ok(path),
        Err(e) => {
            warn!("Write to {} failed: {}", path.display(), e);
            if let Err(e) = fs::remove_file(&path) {
                warn!("Could not remove partial file {}: {}", path.display(), e);
            }
            Err(JekyllError::WriteFailed(path))
        }
    }
}

/// File operations performed when publishing a draft
pub trait FileStore {
    /// Write `content` to a fresh, uniquely named file in `dir`
    fn write_unique(&self, dir: &Path, file_name: &str, content: &str) -> Result<PathBuf>;

    /// Delete a file
    fn remove(&self, path: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// FileStore on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn write_unique(&self, dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
        write_unique_file(dir, file_name, content)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
