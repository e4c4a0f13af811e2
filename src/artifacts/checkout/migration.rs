//! Checkout migration
//!
//! Moves the working tree and the index from the current state to the state
//! stored in a target commit:
//!
//! 1. Plan: the current index gives the files to remove, the target commit's
//!    index gives the files to restore. Every restoration must have a snapshot
//!    copy in the store, otherwise the migration aborts before touching
//!    anything.
//! 2. Remove every currently tracked file from the working tree.
//! 3. Replace the index with the target commit's index.
//! 4. Restore every file of the new index from the target snapshot.
//!
//! The root sentinel has an empty index, so migrating to it only removes.
//! The caller persists the index once the migration is applied.

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use log::debug;
use std::path::PathBuf;

pub struct Migration<'r> {
    repository: &'r Repository,
    /// Index to replace
    index: &'r mut Index,
    /// Commit to move to
    target: CommitId,
    /// Files tracked before the migration
    removals: Vec<PathBuf>,
    /// Files tracked by the target commit
    restorations: Vec<PathBuf>,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, index: &'r mut Index, target: CommitId) -> Self {
        Self {
            repository,
            index,
            target,
            removals: Vec::new(),
            restorations: Vec::new(),
        }
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.plan_changes()?;
        self.remove_tracked_files()?;
        self.update_index();
        self.restore_target_files()?;

        Ok(())
    }

    fn plan_changes(&mut self) -> anyhow::Result<()> {
        self.removals = self.index.entries().cloned().collect();
        self.restorations = self.repository.database().load_index(&self.target)?;

        let database = self.repository.database();
        if let Some(missing) = self
            .restorations
            .iter()
            .find(|path| !database.snapshot_path(&self.target, path).is_file())
        {
            anyhow::bail!(
                "commit {} has no snapshot of {}",
                self.target,
                missing.display()
            );
        }

        debug!(
            "checkout plan for {}: {} removals, {} restorations",
            self.target,
            self.removals.len(),
            self.restorations.len()
        );

        Ok(())
    }

    fn remove_tracked_files(&self) -> anyhow::Result<()> {
        self.removals
            .iter()
            .try_for_each(|path| self.repository.workspace().remove_file(path))
    }

    fn update_index(&mut self) {
        self.index.replace(self.restorations.clone());
    }

    fn restore_target_files(&self) -> anyhow::Result<()> {
        let database = self.repository.database();

        for path in &self.restorations {
            debug!("restoring {} from {}", path.display(), self.target);

            self.repository
                .workspace()
                .restore_file(&database.snapshot_path(&self.target, path), path)?;
        }

        Ok(())
    }
}
