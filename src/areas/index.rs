//! Staging index
//!
//! The index is the ordered set of paths that the next commit will snapshot.
//! Paths keep the order in which they were added and appear at most once.
//!
//! ## Index File Format
//!
//! One repository-relative path per line, in staging order:
//!
//! ```text
//! f.txt
//! docs/notes.md
//! ```
//!
//! The file is only ever replaced whole (written under a scratch name, then
//! moved over the old one), so a reader never sees a half-written index.

use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::core::fs;
use log::debug;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.tern/index`)
    path: Box<Path>,
    /// Tracked paths in staging order
    entries: Vec<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    /// Load the index from disk, discarding in-memory state.
    ///
    /// A missing index file loads as an empty index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = fs::read_string(&self.path, fs::LIST_READ_LIMIT)?;
        self.entries = Self::parse(&content);

        debug!(
            "loaded {} tracked paths from {}",
            self.entries.len(),
            self.path.display()
        );

        Ok(())
    }

    pub fn parse(content: &str) -> Vec<PathBuf> {
        content
            .lines()
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    pub fn add(&mut self, path: PathBuf) -> anyhow::Result<()> {
        if self.contains(&path) {
            return Err(RepositoryError::AlreadyTracked(path).into());
        }

        self.entries.push(path);
        self.changed = true;

        Ok(())
    }

    pub fn remove(&mut self, path: &Path) -> anyhow::Result<()> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry == path)
            .ok_or_else(|| RepositoryError::NotTracked(path.to_path_buf()))?;

        self.entries.remove(position);
        self.changed = true;

        Ok(())
    }

    /// Swap in a whole new set of entries, as checkout does.
    pub fn replace(&mut self, entries: Vec<PathBuf>) {
        self.entries = entries;
        self.changed = true;
    }

    pub fn entries(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}\n", entry.display()))
            .collect()
    }

    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        fs::replace_file(&self.path, &self.serialize())?;
        self.changed = false;

        debug!(
            "persisted {} tracked paths to {}",
            self.entries.len(),
            self.path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn index_in(dir: &TempDir) -> Index {
        Index::new(dir.path().join("index").into_boxed_path())
    }

    fn paths(entries: &[&str]) -> Vec<PathBuf> {
        entries.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn adding_twice_fails_with_already_tracked() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut index = index_in(&dir);

        index.add(PathBuf::from("x"))?;
        let err = index.add(PathBuf::from("x")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<RepositoryError>(),
            Some(&RepositoryError::AlreadyTracked(PathBuf::from("x")))
        );
        assert_eq!(index.len(), 1);

        Ok(())
    }

    #[test]
    fn removing_untracked_path_fails_with_not_tracked() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut index = index_in(&dir);

        let err = index.remove(Path::new("y")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<RepositoryError>(),
            Some(&RepositoryError::NotTracked(PathBuf::from("y")))
        );
        assert!(!index.is_changed());

        Ok(())
    }

    #[test]
    fn removal_preserves_order_of_the_rest() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut index = index_in(&dir);

        for path in ["c.txt", "a.txt", "b.txt"] {
            index.add(PathBuf::from(path))?;
        }
        index.remove(Path::new("a.txt"))?;

        assert_eq!(
            index.entries().cloned().collect::<Vec<_>>(),
            paths(&["c.txt", "b.txt"])
        );

        Ok(())
    }

    #[test]
    fn persisted_index_survives_rehydrate() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut index = index_in(&dir);

        index.add(PathBuf::from("z.txt"))?;
        index.add(PathBuf::from("docs/a.md"))?;
        index.write_updates()?;

        let mut reloaded = index_in(&dir);
        reloaded.rehydrate()?;

        assert_eq!(
            reloaded.entries().cloned().collect::<Vec<_>>(),
            paths(&["z.txt", "docs/a.md"])
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("index"))?,
            "z.txt\ndocs/a.md\n"
        );

        Ok(())
    }

    #[test]
    fn missing_index_file_loads_empty() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let mut index = index_in(&dir);

        index.rehydrate()?;

        assert!(index.is_empty());

        Ok(())
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Remove(String),
    }

    fn op() -> impl Strategy<Value = Op> {
        let name = "[a-e]\\.txt";
        prop_oneof![
            name.prop_map(Op::Add),
            name.prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn index_behaves_like_an_insertion_ordered_set(ops in proptest::collection::vec(op(), 0..40)) {
            let dir = TempDir::new().unwrap();
            let mut index = index_in(&dir);
            let mut model: Vec<String> = Vec::new();

            for op in ops {
                match op {
                    Op::Add(name) => {
                        let result = index.add(PathBuf::from(&name));
                        if model.contains(&name) {
                            prop_assert!(result.is_err());
                        } else {
                            prop_assert!(result.is_ok());
                            model.push(name);
                        }
                    }
                    Op::Remove(name) => {
                        let result = index.remove(Path::new(&name));
                        match model.iter().position(|entry| *entry == name) {
                            Some(position) => {
                                prop_assert!(result.is_ok());
                                model.remove(position);
                            }
                            None => prop_assert!(result.is_err()),
                        }
                    }
                }
            }

            let entries = index
                .entries()
                .map(|entry| entry.display().to_string())
                .collect::<Vec<_>>();
            prop_assert_eq!(entries, model);
        }
    }
}
