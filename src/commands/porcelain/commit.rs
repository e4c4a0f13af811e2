use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::odometer::next_commit_id;
use colored::Colorize;
use log::info;
use std::io::Write;

/// Every commit message must contain this token.
pub const REQUIRED_MESSAGE_TOKEN: &str = "GO BEARS!";

impl Repository {
    /// Snapshot every staged file into a new commit on the current branch.
    ///
    /// All checks run before anything is written: HEAD must be attached, the
    /// message must contain [`REQUIRED_MESSAGE_TOKEN`], and every tracked file
    /// must exist in the working tree.
    pub fn commit(&mut self, message: &str) -> anyhow::Result<Commit> {
        self.ensure_initialized()?;

        let Head::Attached(branch) = self.refs().current_branch()? else {
            return Err(RepositoryError::EmptyBranchHead.into());
        };

        if !message.contains(REQUIRED_MESSAGE_TOKEN) {
            return Err(RepositoryError::MessageRejected(REQUIRED_MESSAGE_TOKEN).into());
        }

        let mut index = self.index();
        index.rehydrate()?;

        if let Some(missing) = index
            .entries()
            .find(|path| !self.workspace().is_file(path))
        {
            return Err(RepositoryError::MissingTrackedFile(missing.clone()).into());
        }

        let parent = self.refs().read_head()?;
        let branch_number = self.refs().branch_number(branch.as_ref())?;
        let id = next_commit_id(&parent, branch_number)?;

        let commit = self
            .database()
            .create(message, &index, &parent, &id, self.workspace())?;

        self.refs().set_head_of(&branch, &id)?;
        self.refs().update_head(&id)?;

        info!("{branch} advanced to {id}");

        let is_root = if parent.is_root() { " (root-commit)" } else { "" };
        writeln!(
            self.writer(),
            "[{}{} {}] {}",
            branch,
            is_root,
            id.to_string().yellow(),
            commit.short_message()
        )?;

        Ok(commit)
    }
}
