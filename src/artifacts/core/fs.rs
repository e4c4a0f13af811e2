//! Filesystem primitives
//!
//! The repository touches the disk only through these calls. Each one either
//! fully succeeds or returns an error carrying the offending path; nothing here
//! rolls back earlier calls.

use anyhow::Context;
use fake::rand;
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Upper bound for control files holding a single value (ids, branch names).
pub const VALUE_READ_LIMIT: u64 = 4 * 1024;

/// Upper bound for control files holding lists or free text.
pub const LIST_READ_LIMIT: u64 = 16 * 1024 * 1024;

pub fn create_dir(path: &Path) -> anyhow::Result<()> {
    debug!("mkdir {}", path.display());

    std::fs::create_dir_all(path)
        .with_context(|| format!("Unable to create directory {}", path.display()))
}

pub fn remove_file(path: &Path) -> anyhow::Result<()> {
    debug!("rm {}", path.display());

    std::fs::remove_file(path).with_context(|| format!("Unable to remove file {}", path.display()))
}

/// Move `src` onto `dst`, replacing `dst` if it exists.
pub fn move_file(src: &Path, dst: &Path) -> anyhow::Result<()> {
    debug!("mv {} {}", src.display(), dst.display());

    std::fs::rename(src, dst).with_context(|| {
        format!(
            "Unable to move {} to {}",
            src.display(),
            dst.display()
        )
    })
}

/// Copy `src` onto `dst`, replacing `dst` if it exists. Missing parent
/// directories of `dst` are created.
pub fn copy_file(src: &Path, dst: &Path) -> anyhow::Result<()> {
    debug!("cp {} {}", src.display(), dst.display());

    if let Some(parent) = dst.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Unable to create directory {}", parent.display()))?;
    }

    std::fs::copy(src, dst).with_context(|| {
        format!(
            "Unable to copy {} to {}",
            src.display(),
            dst.display()
        )
    })?;

    Ok(())
}

pub fn write_string(path: &Path, content: &str) -> anyhow::Result<()> {
    debug!("write {} ({} bytes)", path.display(), content.len());

    std::fs::write(path, content).with_context(|| format!("Unable to write file {}", path.display()))
}

/// Read at most `limit` bytes of `path` as UTF-8.
pub fn read_string(path: &Path, limit: u64) -> anyhow::Result<String> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Unable to open file {}", path.display()))?;

    let mut content = String::new();
    file.take(limit)
        .read_to_string(&mut content)
        .with_context(|| format!("Unable to read file {}", path.display()))?;

    Ok(content)
}

/// Write `content` next to `path` under a scratch name, then move it over
/// `path`. Readers observe either the old or the new content, never a mix.
pub fn replace_file(path: &Path, content: &str) -> anyhow::Result<()> {
    let temp_path = scratch_path(path)?;

    write_string(&temp_path, content)?;
    move_file(&temp_path, path)
}

/// A sibling of `path` with a random name, used for write-then-replace.
pub fn scratch_path(path: &Path) -> anyhow::Result<PathBuf> {
    let parent = path
        .parent()
        .with_context(|| format!("Invalid path {}", path.display()))?;

    Ok(parent.join(format!("tmp-{}", rand::random::<u32>())))
}
