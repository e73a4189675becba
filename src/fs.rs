//! File system access for the skeleton files.
//! Every operation is a blocking whole-file read, write or rename.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The file operations the orchestrator needs.
pub trait FileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn write(&self, path: &Path, content: &str) -> Result<()>;
    /// Moves `from` to `to`. Fails if `to` already exists.
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}

/// Operates on the real file system, resolving relative paths against `root`.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FileSystem for LocalFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let abs_path = self.resolve(path);
        debug!("Reading '{}'.", abs_path.display());
        fs::read_to_string(&abs_path).map_err(|e| Error::file(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let abs_path = self.resolve(path);
        debug!("Writing '{}'.", abs_path.display());
        fs::write(&abs_path, content).map_err(|e| Error::file(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        let abs_from = self.resolve(from);
        let abs_to = self.resolve(to);
        if abs_to.exists() {
            return Err(Error::file(
                to,
                io::Error::new(io::ErrorKind::AlreadyExists, "target file already exists"),
            ));
        }
        debug!("Renaming '{}' to '{}'.", abs_from.display(), abs_to.display());
        fs::rename(&abs_from, &abs_to).map_err(|e| Error::file(from, e))
    }
}
