use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::objects::commit_id::CommitId;
use log::{debug, info};

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around, but commits need a
branch: check out an existing branch, or create one with

    tern checkout -b <new-branch-name>
"#;

impl Repository {
    /// Move HEAD to `target` and reconcile the working tree with it.
    ///
    /// With `new_branch`, `target` is registered as a new branch at the current
    /// HEAD commit and checked out. Otherwise a 40-symbol identifier over
    /// `{A, B, C}` detaches HEAD at that commit, and anything else is checked
    /// out as a branch name. Every failure is raised before any state is
    /// written.
    pub fn checkout(&mut self, target: &str, new_branch: bool) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let current = self.refs().current_branch()?;
        let current_id = self.refs().read_head()?;

        let (next, target_id) = if new_branch {
            let name = BranchName::try_parse(target)?;
            if self.refs().is_registered(name.as_ref())? {
                return Err(RepositoryError::BranchExists(name.to_string()).into());
            }

            (Head::Attached(name), current_id.clone())
        } else {
            self.resolve_target(&current, &current_id, target)?
        };

        // the branch being left resumes from where HEAD is now
        if let Head::Attached(branch) = &current {
            self.refs().set_head_of(branch, &current_id)?;
        }

        if new_branch && let Head::Attached(name) = &next {
            self.refs().register(name, &current_id)?;
        }

        let unchanged = !next.is_detached() && target_id == current_id;
        if unchanged {
            debug!("{target_id} is already checked out, leaving the working tree alone");
        } else {
            let mut index = self.index();
            index.rehydrate()?;

            Migration::new(self, &mut index, target_id.clone()).apply_changes()?;

            index.write_updates()?;
        }

        self.refs().set_current_branch(next.branch())?;
        self.refs().update_head(&target_id)?;

        info!("HEAD moved to {target_id}");

        self.print_new_head(&current, &next, &target_id, new_branch)
    }

    fn resolve_target(
        &self,
        current: &Head,
        current_id: &CommitId,
        target: &str,
    ) -> anyhow::Result<(Head, CommitId)> {
        match Revision::parse(target) {
            Revision::Commit(id) => {
                if !self.database().contains(&id) {
                    return Err(RepositoryError::CommitNotFound(id.to_string()).into());
                }

                Ok((Head::Detached, id))
            }
            Revision::Branch(name) => {
                let target_id = match current.branch() {
                    Some(branch) if branch.as_ref() == name => current_id.clone(),
                    _ => self.refs().head_of(&name)?,
                };

                let branch = BranchName::try_parse(name.as_str())
                    .map_err(|_| RepositoryError::BranchNotFound(name.clone()))?;

                Ok((Head::Attached(branch), target_id))
            }
        }
    }

    fn print_new_head(
        &self,
        current: &Head,
        next: &Head,
        target_id: &CommitId,
        new_branch: bool,
    ) -> anyhow::Result<()> {
        match next {
            Head::Detached => {
                if !current.is_detached() {
                    eprintln!("Note: checking out '{}'.\n{}", target_id, DETACHMENT_NOTICE);
                }

                let commit = self.database().load(target_id)?;
                eprintln!("HEAD is now at {} {}", target_id, commit.short_message());
            }
            Head::Attached(branch) if new_branch => {
                eprintln!("Switched to a new branch '{}'", branch)
            }
            Head::Attached(branch) if current == next => eprintln!("Already on '{}'", branch),
            Head::Attached(branch) => eprintln!("Switched to branch '{}'", branch),
        }

        Ok(())
    }
}
