use crate::areas::refs::Head;
use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        match self.refs().current_branch()? {
            Head::Attached(branch) => {
                writeln!(self.writer(), "On branch {}", branch.to_string().green())?
            }
            Head::Detached => writeln!(
                self.writer(),
                "HEAD detached at {}",
                self.refs().read_head()?.to_string().yellow()
            )?,
        }

        let mut index = self.index();
        index.rehydrate()?;

        writeln!(self.writer(), "Tracked files:")?;
        writeln!(self.writer())?;
        for path in index.entries() {
            writeln!(self.writer(), "  {}", path.display())?;
        }
        writeln!(self.writer())?;
        writeln!(self.writer(), "{} files total", index.len())?;

        Ok(())
    }
}
