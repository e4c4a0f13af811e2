use crate::areas::CONTROL_DIR;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::errors::RepositoryError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One repository session
///
/// All repository state (HEAD, current branch, index) is reached through this
/// object, so independent instances can live side by side in one process.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Open the repository rooted at `path`. Nothing is created on disk; a
    /// missing directory is only created by `init`. Command output goes to
    /// `writer`.
    pub fn new(path: impl AsRef<Path>, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let path = if path.exists() {
            path.canonicalize()
        } else {
            std::path::absolute(path)
        }
        .with_context(|| format!("Unable to resolve path {}", path.display()))?;
        let control_path = path.join(CONTROL_DIR);

        let index = Index::new(control_path.join("index").into_boxed_path());
        let database = Database::new(control_path.clone().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(control_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn control_path(&self) -> PathBuf {
        self.path.join(CONTROL_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn is_initialized(&self) -> bool {
        self.control_path().is_dir()
    }

    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            return Err(RepositoryError::NotARepository(self.path.to_path_buf()).into());
        }

        Ok(())
    }
}
