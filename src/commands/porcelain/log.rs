use crate::areas::repository::Repository;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::objects::commit::Commit;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print the history of HEAD, newest first.
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        if head.is_root() {
            return Err(RepositoryError::EmptyHistory.into());
        }

        for commit in self.database().history(head) {
            self.show_commit(&commit?)?;
        }

        Ok(())
    }

    fn show_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "commit {}", commit.id().to_string().yellow())?;
        writeln!(writer, "Date:   {}", commit.readable_timestamp())?;
        writeln!(writer)?;
        for message_line in commit.message().lines() {
            writeln!(writer, "    {}", message_line)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
