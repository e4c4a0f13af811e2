use crate::areas::repository::Repository;
use log::info;

impl Repository {
    /// Stage `path` for the next commit. The file is read only at commit time.
    pub fn add(&mut self, path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let path = self.workspace().relative_path(path)?;

        let mut index = self.index();
        index.rehydrate()?;
        index.add(path.clone())?;
        index.write_updates()?;

        info!("staged {}", path.display());

        Ok(())
    }
}
