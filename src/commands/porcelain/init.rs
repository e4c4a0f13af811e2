use crate::areas::repository::Repository;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::errors::RepositoryError;
use crate::artifacts::core::fs;
use anyhow::Context;
use log::info;
use std::io::Write;

impl Repository {
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.is_initialized() {
            return Err(RepositoryError::AlreadyInitialized(self.path().to_path_buf()).into());
        }

        fs::create_dir(self.path()).context("Failed to create the repository directory")?;
        fs::create_dir(&self.control_path()).context("Failed to create .tern directory")?;

        self.index()
            .write_updates()
            .context("Failed to create .tern/index file")?;

        self.refs()
            .initialize(&BranchName::try_parse(DEFAULT_BRANCH)?)
            .context("Failed to create the branch registry")?;

        info!("initialized repository in {}", self.path().display());

        writeln!(
            self.writer(),
            "Initialized empty tern repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
