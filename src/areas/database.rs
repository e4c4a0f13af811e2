//! Commit graph and snapshot store
//!
//! Every commit is a directory named after its identifier, holding the commit
//! metadata and a byte-exact copy of every tracked file. Records are written
//! once and never modified or deleted; parent links chain them back to the root
//! sentinel.

use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::core::fs;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use fake::rand;
use log::{debug, info};
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index";
const PARENT_FILE: &str = "parent";
const MESSAGE_FILE: &str = "message";
const DATE_FILE: &str = "date";
const TREE_DIR: &str = "tree";

#[derive(Debug)]
pub struct Database {
    /// Path to the control directory (typically `.tern`)
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commit_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.to_path())
    }

    /// Location of the stored copy of `file_path` inside commit `id`
    pub fn snapshot_path(&self, id: &CommitId, file_path: &Path) -> PathBuf {
        self.commit_path(id).join(TREE_DIR).join(file_path)
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        !id.is_root() && self.commit_path(id).is_dir()
    }

    /// Materialize a new commit `id` from the staged `index`, copying every
    /// tracked file out of `workspace`.
    ///
    /// The record is assembled in a scratch directory and moved into place as
    /// the last step, so on failure no commit directory appears and the scratch
    /// directory is discarded.
    pub fn create(
        &self,
        message: &str,
        index: &Index,
        parent: &CommitId,
        id: &CommitId,
        workspace: &Workspace,
    ) -> anyhow::Result<Commit> {
        if id.is_root() || self.contains(id) {
            anyhow::bail!("commit {} already exists", id);
        }

        let timestamp = chrono::Local::now().fixed_offset();
        let scratch_path = self
            .path
            .join(format!("tmp-commit-{}", rand::random::<u32>()));

        let result = self
            .write_record(&scratch_path, message, index, parent, &timestamp, workspace)
            .and_then(|_| fs::move_file(&scratch_path, &self.commit_path(id)));

        if let Err(err) = result {
            if scratch_path.exists() {
                std::fs::remove_dir_all(&scratch_path).with_context(|| {
                    format!(
                        "Unable to discard scratch directory {}",
                        scratch_path.display()
                    )
                })?;
            }
            return Err(err);
        }

        info!("created commit {id} with {} files", index.len());

        Ok(Commit::new(
            id.clone(),
            parent.clone(),
            message.to_string(),
            timestamp,
            index.entries().cloned().collect(),
        ))
    }

    fn write_record(
        &self,
        record_path: &Path,
        message: &str,
        index: &Index,
        parent: &CommitId,
        timestamp: &chrono::DateTime<chrono::FixedOffset>,
        workspace: &Workspace,
    ) -> anyhow::Result<()> {
        fs::create_dir(record_path)?;

        fs::write_string(&record_path.join(INDEX_FILE), &index.serialize())?;
        fs::write_string(&record_path.join(PARENT_FILE), &parent.to_string())?;
        fs::write_string(&record_path.join(MESSAGE_FILE), message)?;
        fs::write_string(&record_path.join(DATE_FILE), &timestamp.to_rfc3339())?;

        let tree_path = record_path.join(TREE_DIR);
        fs::create_dir(&tree_path)?;

        for file_path in index.entries() {
            fs::copy_file(&workspace.absolute_path(file_path), &tree_path.join(file_path))?;
        }

        Ok(())
    }

    /// Load the commit record `id`. Fails with `CommitNotFound` for the root
    /// sentinel or an identifier with no record.
    pub fn load(&self, id: &CommitId) -> anyhow::Result<Commit> {
        if !self.contains(id) {
            return Err(RepositoryError::CommitNotFound(id.to_string()).into());
        }

        let record_path = self.commit_path(id);
        debug!("loading commit record {}", record_path.display());

        let parent = fs::read_string(&record_path.join(PARENT_FILE), fs::VALUE_READ_LIMIT)?;
        let parent = CommitId::try_parse(parent.trim())?;

        let message = fs::read_string(&record_path.join(MESSAGE_FILE), fs::LIST_READ_LIMIT)?;

        let date = fs::read_string(&record_path.join(DATE_FILE), fs::VALUE_READ_LIMIT)?;
        let timestamp = chrono::DateTime::parse_from_rfc3339(date.trim())
            .with_context(|| format!("Invalid timestamp in commit {}", id))?;

        let index = self.load_index(id)?;

        Ok(Commit::new(id.clone(), parent, message, timestamp, index))
    }

    /// Tracked paths of commit `id`. The root sentinel has an empty index.
    pub fn load_index(&self, id: &CommitId) -> anyhow::Result<Vec<PathBuf>> {
        if id.is_root() {
            return Ok(Vec::new());
        }

        if !self.contains(id) {
            return Err(RepositoryError::CommitNotFound(id.to_string()).into());
        }

        let content = fs::read_string(
            &self.commit_path(id).join(INDEX_FILE),
            fs::LIST_READ_LIMIT,
        )?;

        Ok(Index::parse(&content))
    }

    /// Commits reachable from `start` through parent links, newest first.
    pub fn history(&self, start: CommitId) -> RevList<'_> {
        RevList::new(self, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    struct Fixture {
        dir: TempDir,
        database: Database,
        workspace: Workspace,
        index: Index,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let control = dir.path().join(".tern");
        std::fs::create_dir_all(&control).expect("Failed to create control dir");

        Fixture {
            database: Database::new(control.clone().into_boxed_path()),
            workspace: Workspace::new(dir.path().into()),
            index: Index::new(control.join("index").into_boxed_path()),
            dir,
        }
    }

    fn id(symbol: &str) -> CommitId {
        CommitId::try_parse(&symbol.repeat(40)).unwrap()
    }

    #[test]
    fn created_commit_snapshots_tracked_files() -> anyhow::Result<()> {
        let mut fx = fixture();
        std::fs::create_dir_all(fx.dir.path().join("docs"))?;
        std::fs::write(fx.dir.path().join("f.txt"), "hi")?;
        std::fs::write(fx.dir.path().join("docs").join("a.md"), [0u8, 159, 146, 150])?;
        fx.index.add(PathBuf::from("f.txt"))?;
        fx.index.add(PathBuf::from("docs/a.md"))?;

        let commit = fx
            .database
            .create("first GO BEARS!", &fx.index, &CommitId::Root, &id("A"), &fx.workspace)?;

        assert_eq!(
            std::fs::read(fx.database.snapshot_path(&id("A"), Path::new("f.txt")))?,
            b"hi"
        );
        assert_eq!(
            std::fs::read(fx.database.snapshot_path(&id("A"), Path::new("docs/a.md")))?,
            vec![0u8, 159, 146, 150]
        );

        let loaded = fx.database.load(&id("A"))?;
        assert_eq!(loaded.parent(), &CommitId::Root);
        assert_eq!(loaded.message(), "first GO BEARS!");
        assert_eq!(loaded.index(), commit.index());
        assert_eq!(
            loaded.timestamp().timestamp(),
            commit.timestamp().timestamp()
        );

        Ok(())
    }

    #[test]
    fn failed_snapshot_leaves_no_commit_behind() -> anyhow::Result<()> {
        let mut fx = fixture();
        fx.index.add(PathBuf::from("missing.txt"))?;

        let result = fx
            .database
            .create("GO BEARS!", &fx.index, &CommitId::Root, &id("A"), &fx.workspace);

        assert!(result.is_err());
        assert!(!fx.database.contains(&id("A")));
        let leftovers = std::fs::read_dir(fx.dir.path().join(".tern"))?.count();
        assert_eq!(leftovers, 0);

        Ok(())
    }

    #[test]
    fn loading_unknown_commit_fails_with_commit_not_found() {
        let fx = fixture();

        let err = fx.database.load(&id("B")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<RepositoryError>(),
            Some(&RepositoryError::CommitNotFound("B".repeat(40)))
        );
    }

    #[test]
    fn root_sentinel_has_an_empty_index() -> anyhow::Result<()> {
        let fx = fixture();

        assert!(fx.database.load_index(&CommitId::Root)?.is_empty());

        Ok(())
    }
}
