use crate::areas::repository::Repository;
use log::info;

impl Repository {
    /// Unstage `path`. The working tree copy is left alone.
    pub fn rm(&mut self, path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let path = self.workspace().relative_path(path)?;

        let mut index = self.index();
        index.rehydrate()?;
        index.remove(&path)?;
        index.write_updates()?;

        info!("unstaged {}", path.display());

        Ok(())
    }
}
