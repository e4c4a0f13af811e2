use crate::areas::CONTROL_DIR;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::core::fs;
use log::warn;
use std::path::{Component, Path, PathBuf};

/// The working tree: every tracked path is relative to `path`.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Turn user input into a repository-relative path.
    ///
    /// Absolute paths are accepted when they point inside the workspace.
    /// Paths that are empty, climb out with `..`, point into the control
    /// directory or contain control characters are rejected with `InvalidPath`.
    /// The index stores one path per line, so a line break in a name would
    /// split it into two entries.
    pub fn relative_path(&self, path: &str) -> anyhow::Result<PathBuf> {
        let invalid = || RepositoryError::InvalidPath(path.to_string());
        let candidate = Path::new(path);

        let candidate = if candidate.is_absolute() {
            candidate.strip_prefix(&self.path).map_err(|_| invalid())?
        } else {
            candidate
        };

        let mut relative = PathBuf::new();
        for component in candidate.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(part)
                    if !part.to_string_lossy().chars().any(char::is_control) =>
                {
                    relative.push(part)
                }
                Component::Normal(_)
                | Component::ParentDir
                | Component::RootDir
                | Component::Prefix(_) => {
                    return Err(invalid().into());
                }
            }
        }

        let inside_control_dir = relative
            .components()
            .next()
            .is_some_and(|first| first.as_os_str() == CONTROL_DIR);

        if relative.as_os_str().is_empty() || inside_control_dir {
            return Err(invalid().into());
        }

        Ok(relative)
    }

    pub fn absolute_path(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }

    pub fn is_file(&self, file_path: &Path) -> bool {
        self.absolute_path(file_path).is_file()
    }

    /// Delete a tracked file. A file that is already gone is skipped.
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let path = self.absolute_path(file_path);

        if !path.exists() {
            warn!("{} is already missing from the working tree", file_path.display());
            return Ok(());
        }

        fs::remove_file(&path)
    }

    /// Write the content of `source` (a snapshot copy) to `file_path`,
    /// creating parent directories as needed.
    pub fn restore_file(&self, source: &Path, file_path: &Path) -> anyhow::Result<()> {
        fs::copy_file(source, &self.absolute_path(file_path))
    }
}
