use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;

/// Lazy walk over a commit's ancestry
///
/// Yields the start commit, then its parent, and so on until the root
/// sentinel. Each step reads one commit record. A broken link yields a single
/// `CommitNotFound` error and ends the walk; missing commits are never skipped.
/// The walk cannot be resumed: start a new one with `Database::history`.
pub struct RevList<'r> {
    database: &'r Database,
    next: Option<CommitId>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: CommitId) -> Self {
        Self {
            database,
            next: Some(start),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;

        if id.is_root() {
            return None;
        }

        match self.database.load(&id) {
            Ok(commit) => {
                self.next = Some(commit.parent().clone());
                Some(Ok(commit))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::areas::database::Database;
    use crate::areas::index::Index;
    use crate::areas::workspace::Workspace;
    use crate::artifacts::core::errors::RepositoryError;
    use crate::artifacts::objects::commit_id::CommitId;
    use crate::artifacts::objects::odometer::next_commit_id;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    fn chain(dir: &TempDir, length: usize) -> anyhow::Result<(Database, Vec<CommitId>)> {
        let control = dir.path().join(".tern");
        std::fs::create_dir_all(&control)?;

        let database = Database::new(control.clone().into_boxed_path());
        let workspace = Workspace::new(dir.path().into());
        let index = Index::new(control.join("index").into_boxed_path());

        let mut ids = Vec::new();
        let mut parent = CommitId::Root;
        for step in 0..length {
            let id = next_commit_id(&parent, 0)?;
            database.create(&format!("step {step}"), &index, &parent, &id, &workspace)?;
            ids.push(id.clone());
            parent = id;
        }

        Ok((database, ids))
    }

    #[test]
    fn history_walks_parents_back_to_the_root() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let (database, ids) = chain(&dir, 3)?;

        let messages = database
            .history(ids[2].clone())
            .map(|commit| commit.map(|commit| commit.message().to_string()))
            .collect::<anyhow::Result<Vec<_>>>()?;

        assert_eq!(messages, vec!["step 2", "step 1", "step 0"]);

        Ok(())
    }

    #[test]
    fn history_from_root_is_empty() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let (database, _) = chain(&dir, 0)?;

        assert_eq!(database.history(CommitId::Root).count(), 0);

        Ok(())
    }

    #[test]
    fn broken_link_ends_the_walk_with_an_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let (database, ids) = chain(&dir, 3)?;
        std::fs::remove_dir_all(database.commit_path(&ids[1]))?;

        let walk = database.history(ids[2].clone()).collect::<Vec<_>>();

        assert_eq!(walk.len(), 2);
        assert!(walk[0].is_ok());
        let err = walk[1].as_ref().unwrap_err();
        assert_eq!(
            err.downcast_ref::<RepositoryError>(),
            Some(&RepositoryError::CommitNotFound(ids[1].to_string()))
        );

        Ok(())
    }
}
