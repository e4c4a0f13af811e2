use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// List branches in registration order, marking the current one.
    pub fn branch(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().current_branch()?;

        for branch in self.refs().list_branches()? {
            if head.branch() == Some(&branch) {
                writeln!(self.writer(), "* {}", branch.to_string().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(())
    }
}
